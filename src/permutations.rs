//! Permutations by adjacent and star transpositions.
//!
//! These are the single-axis companions to the fixed-size engines:
//!
//! * [`plain_changes`] — the Steinhaus-Johnson-Trotter order. Each yielded
//!   `x` means "swap positions `x` and `x + 1`"; `n! - 1` swaps visit every
//!   permutation of `n` elements once. [`PermutationWalk`] does the replay.
//! * [`plain_changes_cycle`] — the cyclic variant: `n!` swaps, the last of
//!   which restores the starting permutation.
//! * [`ehrlich_swaps`] — Ehrlich's star-transposition order. Each yielded
//!   `x` means "swap positions `0` and `x`".
//!
//! All three keep their whole state explicitly (a chain of suspended levels
//! for the plain-change orders, two bookkeeping arrays for Ehrlich), so no
//! recursion happens while iterating.

use crate::traits::Walk;

#[derive(Clone, Copy, Debug)]
enum Phase {
    Down(usize),
    Mid,
    Up(usize),
    End,
    Done,
}

/// Lazy adjacent-swap sequence, created by [`plain_changes`].
///
/// Level `n` interleaves runs of its own swaps with single swaps pulled
/// from level `n - 1`, which is suspended in `inner` between pulls.
#[derive(Clone, Debug)]
pub struct PlainChanges {
    n: usize,
    inner: Option<Box<PlainChanges>>,
    phase: Phase,
}

/// Enumerate permutations of `n` elements as a sequence of adjacent swaps.
///
/// Yields `n! - 1` swaps; `n < 2` yields an empty sequence.
pub fn plain_changes(n: usize) -> PlainChanges {
    if n < 2 {
        return PlainChanges {
            n,
            inner: None,
            phase: Phase::Done,
        };
    }
    let mut level = PlainChanges {
        n: 2,
        inner: None,
        phase: Phase::Down(0),
    };
    for m in 3..=n {
        level = PlainChanges {
            n: m,
            inner: Some(Box::new(level)),
            phase: Phase::Down(m - 2),
        };
    }
    level
}

impl Iterator for PlainChanges {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Down(i) => {
                    self.phase = if i == 0 { Phase::Mid } else { Phase::Down(i - 1) };
                    return Some(i);
                }
                Phase::Mid => match self.inner.as_mut().and_then(|g| g.next()) {
                    Some(x) => {
                        self.phase = Phase::Up(0);
                        return Some(x + 1);
                    }
                    None => self.phase = Phase::Done,
                },
                Phase::Up(i) => {
                    self.phase = if i == self.n - 2 {
                        Phase::End
                    } else {
                        Phase::Up(i + 1)
                    };
                    return Some(i);
                }
                Phase::End => match self.inner.as_mut().and_then(|g| g.next()) {
                    Some(x) => {
                        self.phase = Phase::Down(self.n - 2);
                        return Some(x);
                    }
                    None => self.phase = Phase::Done,
                },
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum CyclePhase {
    Base0,
    Base1,
    Pull,
    Down { x: usize, i: usize },
    Mid { x: usize },
    Up(usize),
    End,
    Done,
}

/// Lazy cyclic adjacent-swap sequence, created by [`plain_changes_cycle`].
#[derive(Clone, Debug)]
pub struct PlainChangesCycle {
    n: usize,
    inner: Option<Box<PlainChangesCycle>>,
    phase: CyclePhase,
}

/// Enumerate permutations of `n` elements as a cyclic sequence of adjacent
/// swaps.
///
/// Yields `n!` swaps; the final swap returns the permutation to its starting
/// order, so the walk can be replayed back to back. `n < 2` yields an empty
/// sequence.
pub fn plain_changes_cycle(n: usize) -> PlainChangesCycle {
    if n < 2 {
        return PlainChangesCycle {
            n,
            inner: None,
            phase: CyclePhase::Done,
        };
    }
    let mut level = PlainChangesCycle {
        n: 2,
        inner: None,
        phase: CyclePhase::Base0,
    };
    for m in 3..=n {
        level = PlainChangesCycle {
            n: m,
            inner: Some(Box::new(level)),
            phase: CyclePhase::Pull,
        };
    }
    level
}

impl Iterator for PlainChangesCycle {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            match self.phase {
                CyclePhase::Done => return None,
                CyclePhase::Base0 => {
                    self.phase = CyclePhase::Base1;
                    return Some(0);
                }
                CyclePhase::Base1 => {
                    // the second swap returns to the original order
                    self.phase = CyclePhase::Done;
                    return Some(0);
                }
                CyclePhase::Pull => match self.inner.as_mut().and_then(|g| g.next()) {
                    Some(x) => self.phase = CyclePhase::Down { x, i: self.n - 2 },
                    None => self.phase = CyclePhase::Done,
                },
                CyclePhase::Down { x, i } => {
                    self.phase = if i == 0 {
                        CyclePhase::Mid { x }
                    } else {
                        CyclePhase::Down { x, i: i - 1 }
                    };
                    return Some(i);
                }
                CyclePhase::Mid { x } => {
                    self.phase = CyclePhase::Up(0);
                    return Some(x + 1);
                }
                CyclePhase::Up(i) => {
                    self.phase = if i == self.n - 2 {
                        CyclePhase::End
                    } else {
                        CyclePhase::Up(i + 1)
                    };
                    return Some(i);
                }
                CyclePhase::End => match self.inner.as_mut().and_then(|g| g.next()) {
                    Some(x) => {
                        self.phase = CyclePhase::Pull;
                        return Some(x);
                    }
                    None => self.phase = CyclePhase::Done,
                },
            }
        }
    }
}

/// Lazy star-transposition sequence, created by [`ehrlich_swaps`].
#[derive(Clone, Debug)]
pub struct EhrlichSwaps {
    perm: Vec<usize>,
    state: Vec<usize>,
    n: usize,
    done: bool,
}

/// Enumerate permutations of `n` elements as swaps with position 0.
///
/// Each yielded `x` means "swap positions `0` and `x`"; `n! - 1` swaps visit
/// every permutation once. `n < 2` yields an empty sequence.
pub fn ehrlich_swaps(n: usize) -> EhrlichSwaps {
    if n < 2 {
        return EhrlichSwaps {
            perm: Vec::new(),
            state: Vec::new(),
            n,
            done: true,
        };
    }
    EhrlichSwaps {
        perm: (0..n).collect(),
        state: vec![0; n + 1],
        n,
        done: false,
    }
}

impl Iterator for EhrlichSwaps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        let mut idx = 1;
        loop {
            if self.state[idx] == idx {
                self.state[idx] = 0;
                idx += 1;
            }
            if self.state[idx] < idx {
                break;
            }
        }
        if idx == self.n {
            self.done = true;
            return None;
        }
        self.state[idx] += 1;
        let out = self.perm[idx];
        self.perm[1..idx].reverse();
        Some(out)
    }
}

/// Steps through all permutations of `0..n` in plain-change order.
#[derive(Clone, Debug)]
pub struct PermutationWalk {
    swaps: PlainChanges,
    cells: Vec<usize>,
}

impl PermutationWalk {
    /// Create a walk starting at the identity permutation.
    pub fn new(n: usize) -> Self {
        PermutationWalk {
            swaps: plain_changes(n),
            cells: (0..n).collect(),
        }
    }

    /// Returns the current permutation.
    pub fn get(&self) -> &[usize] {
        &self.cells
    }

    /// Returns the number of permuted elements.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Applies the next swap, or returns `false` if the walk is done.
    pub fn advance(&mut self) -> bool {
        match self.swaps.next() {
            Some(x) => {
                self.cells.swap(x, x + 1);
                true
            }
            None => false,
        }
    }
}

impl Walk for PermutationWalk {
    type Cell = usize;

    fn get(&self) -> &[usize] {
        Self::get(self)
    }

    fn advance(&mut self) -> bool {
        Self::advance(self)
    }
}
