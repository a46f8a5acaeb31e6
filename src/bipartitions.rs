//! Set bipartitions: partitions of `n` elements into exactly 2 blocks.
//!
//! The `k = 2` specialization of the general engine in the partitions
//! module. With only two blocks a move is fully described by the position
//! whose membership changes, so `bipartition_flips(n)` yields bare positions
//! rather than `(position, block)` pairs: flip the bit at the position.
//! Applied in order to `0^(n-1) 1`, the flips visit every bipartition of `n`
//! elements once. [`BipartitionWalk`] does the replay.
//!
//! The recursion collapses to three mutually recursive sub-sequences, which
//! makes this engine a compact cross-check for the eight-procedure general
//! one: `bipartition_flips(n)` emits the same positions, in the same order,
//! as `partition_moves(n, 2)`.

use arrayvec::ArrayVec;

use crate::traits::Walk;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gen {
    Fwd0,
    Fwd1,
    Rev1,
}

#[derive(Clone, Copy, Debug)]
enum Task {
    Call(Gen, usize),
    Flip(usize),
}

// The recurrences address elements 1..=n; the public sequence is 0-indexed.
fn fl(pos: usize) -> Task {
    Task::Flip(pos - 1)
}

/// Lazy flip sequence, created by [`bipartition_flips`].
#[derive(Clone, Debug)]
pub struct BipartitionFlips {
    stack: Vec<Task>,
}

/// Enumerate bipartitions of `n` elements as a sequence of single-position
/// flips.
///
/// Yields `stirling2(n, 2) - 1` flips when `n >= 3`; smaller `n` yields an
/// empty sequence, since a family with at most one member needs no edits.
pub fn bipartition_flips(n: usize) -> BipartitionFlips {
    let mut stack = Vec::new();
    if n >= 3 {
        stack.push(Task::Call(Gen::Fwd0, n));
    }
    BipartitionFlips { stack }
}

impl BipartitionFlips {
    fn expand(&mut self, gen: Gen, n: usize) {
        if n < 3 {
            return;
        }
        let mut body: ArrayVec<Task, 4> = ArrayVec::new();
        match gen {
            Gen::Fwd0 => {
                body.push(fl(n - 1));
                body.push(Task::Call(Gen::Fwd1, n - 1));
                body.push(fl(n));
                body.push(Task::Call(Gen::Rev1, n - 1));
            }
            Gen::Fwd1 => {
                body.push(fl(2));
                body.push(Task::Call(Gen::Rev1, n - 1));
                body.push(fl(n));
                body.push(Task::Call(Gen::Fwd1, n - 1));
            }
            Gen::Rev1 => {
                body.push(Task::Call(Gen::Rev1, n - 1));
                body.push(fl(n));
                body.push(Task::Call(Gen::Fwd1, n - 1));
                body.push(fl(2));
            }
        }
        self.stack.extend(body.into_iter().rev());
    }
}

impl Iterator for BipartitionFlips {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            match self.stack.pop()? {
                Task::Flip(pos) => return Some(pos),
                Task::Call(gen, n) => self.expand(gen, n),
            }
        }
    }
}

/// Steps through all bipartitions of `n` elements, materialized as a string
/// of `0`/`1` block memberships.
#[derive(Clone, Debug)]
pub struct BipartitionWalk {
    flips: BipartitionFlips,
    cells: Vec<u8>,
}

impl BipartitionWalk {
    /// Create a walk starting at the canonical string `0^(n-1) 1`.
    pub fn new(n: usize) -> Self {
        let mut cells = vec![0; n.saturating_sub(1)];
        if n > 0 {
            cells.push(1);
        }
        BipartitionWalk {
            flips: bipartition_flips(n),
            cells,
        }
    }

    /// Returns the current bipartition.
    pub fn get(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the size of the partitioned set.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Applies the next flip, or returns `false` if the walk is done.
    pub fn advance(&mut self) -> bool {
        match self.flips.next() {
            Some(pos) => {
                self.cells[pos] = 1 - self.cells[pos];
                true
            }
            None => false,
        }
    }
}

impl Walk for BipartitionWalk {
    type Cell = u8;

    fn get(&self) -> &[u8] {
        Self::get(self)
    }

    fn advance(&mut self) -> bool {
        Self::advance(self)
    }
}
