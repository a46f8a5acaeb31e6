//! Set partitions of `n` elements into `k` blocks, in minimal-change order.
//!
//! A partition is represented as a restricted-growth string: `a[i]` is the
//! block of element `i`, blocks numbered in order of first appearance.
//! `partition_moves(n, k)` yields moves `(position, block)`: set `a[position]`
//! to `block`. Applied in order to the canonical string
//! `0^(n-k) 0 1 2 .. (k-1)`, the moves visit every partition of `n` elements
//! into exactly `k` non-empty blocks once, each differing from its
//! predecessor in a single position. [`PartitionWalk`] does the replay.
//!
//! The order follows Ruskey, "Simple combinatorial Gray codes constructed by
//! reversing sublists" (LNCS 762): eight mutually recursive sub-sequences,
//! split by traversal direction, by which endpoint family the sublist is
//! anchored to (variant 0 or 1), and by the parity of `k`. The recursion
//! runs on an explicit work stack.
//!
//! A forward sub-sequence starts at `0^(n-k)012..(k-1)`; variant 0 ends at
//! `0^(n-k)12..(k-1)0`, variant 1 at `012..(k-1)0^(n-k)`. A reversed
//! sub-sequence runs the same list backwards.

use arrayvec::ArrayVec;

use crate::traits::Walk;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gen {
    Fwd0Even,
    Fwd0Odd,
    Fwd1Even,
    Fwd1Odd,
    Rev0Even,
    Rev0Odd,
    Rev1Even,
    Rev1Odd,
}

// Pending work; the top of the stack runs first. The sweeps are the striding
// inner loops of the recurrences: a pair of moves per iteration, with a
// recursive sub-sequence between consecutive moves in the general case.
#[derive(Clone, Copy, Debug)]
enum Task {
    Call(Gen, usize, usize),
    Move(usize, usize),
    // i, i-2, .. down through 1: (n,i) A (n,i-1) B per iteration
    SweepDown {
        n: usize,
        k: usize,
        i: usize,
        calls: Option<(Gen, Gen)>,
    },
    // 1, 3, .. while i < stop: A (n,i) B (n,i+1) per iteration
    SweepUp {
        n: usize,
        k: usize,
        i: usize,
        stop: usize,
        calls: Option<(Gen, Gen)>,
    },
}

// The recurrences address elements 1..=n; the public sequence is 0-indexed.
fn mv(pos: usize, block: usize) -> Task {
    Task::Move(pos - 1, block)
}

/// Lazy block-move sequence, created by [`partition_moves`].
#[derive(Clone, Debug)]
pub struct PartitionMoves {
    stack: Vec<Task>,
}

/// Enumerate partitions of `n` elements into `k` blocks as a sequence of
/// single-element moves.
///
/// Yields `stirling2(n, k) - 1` moves when `1 < k < n`; anything else yields
/// an empty sequence, since a family with at most one member needs no edits.
pub fn partition_moves(n: usize, k: usize) -> PartitionMoves {
    let mut stack = Vec::new();
    if k > 1 && k < n {
        if k % 2 == 0 {
            stack.push(Task::Call(Gen::Fwd0Even, n, k));
        } else {
            stack.push(Task::Call(Gen::Fwd0Odd, n, k));
        }
    }
    PartitionMoves { stack }
}

impl PartitionMoves {
    // Push the body of one sub-sequence. Bodies are written in execution
    // order and reversed onto the stack; every Call keeps 1 < k < n.
    fn expand(&mut self, gen: Gen, n: usize, k: usize) {
        let mut body: ArrayVec<Task, 6> = ArrayVec::new();
        match gen {
            Gen::Fwd0Even => {
                if k > 2 {
                    body.push(Task::Call(Gen::Fwd0Odd, n - 1, k - 1));
                }
                body.push(mv(n - 1, k - 1));
                if k < n - 1 {
                    body.push(Task::Call(Gen::Fwd1Even, n - 1, k));
                    body.push(mv(n, k - 2));
                    body.push(Task::Call(Gen::Rev1Even, n - 1, k));
                    if k > 3 {
                        body.push(Task::SweepDown {
                            n,
                            k,
                            i: k - 3,
                            calls: Some((Gen::Fwd1Even, Gen::Rev1Even)),
                        });
                    }
                } else {
                    body.push(mv(n, k - 2));
                    if k > 3 {
                        body.push(Task::SweepDown {
                            n,
                            k,
                            i: k - 3,
                            calls: None,
                        });
                    }
                }
            }
            Gen::Fwd1Even => {
                if k > 3 {
                    body.push(Task::Call(Gen::Fwd1Odd, n - 1, k - 1));
                }
                body.push(mv(k, k - 1));
                if k < n - 1 {
                    body.push(Task::Call(Gen::Rev1Even, n - 1, k));
                    body.push(mv(n, k - 2));
                    body.push(Task::Call(Gen::Fwd1Even, n - 1, k));
                    if k > 3 {
                        body.push(Task::SweepDown {
                            n,
                            k,
                            i: k - 3,
                            calls: Some((Gen::Rev1Even, Gen::Fwd1Even)),
                        });
                    }
                } else {
                    body.push(mv(n, k - 2));
                    if k > 3 {
                        body.push(Task::SweepDown {
                            n,
                            k,
                            i: k - 3,
                            calls: None,
                        });
                    }
                }
            }
            Gen::Rev0Even => {
                if k < n - 1 {
                    body.push(Task::SweepUp {
                        n,
                        k,
                        i: 1,
                        stop: k - 2,
                        calls: Some((Gen::Fwd1Even, Gen::Rev1Even)),
                    });
                    body.push(Task::Call(Gen::Fwd1Even, n - 1, k));
                    body.push(mv(n, k - 1));
                    body.push(Task::Call(Gen::Rev1Even, n - 1, k));
                } else {
                    body.push(Task::SweepUp {
                        n,
                        k,
                        i: 1,
                        stop: k - 2,
                        calls: None,
                    });
                    body.push(mv(n, k - 1));
                }
                body.push(mv(n - 1, 0));
                if k > 3 {
                    body.push(Task::Call(Gen::Rev0Odd, n - 1, k - 1));
                }
            }
            Gen::Rev1Even => {
                if k < n - 1 {
                    body.push(Task::SweepUp {
                        n,
                        k,
                        i: 1,
                        stop: k - 2,
                        calls: Some((Gen::Rev1Even, Gen::Fwd1Even)),
                    });
                    body.push(Task::Call(Gen::Rev1Even, n - 1, k));
                    body.push(mv(n, k - 1));
                    body.push(Task::Call(Gen::Fwd1Even, n - 1, k));
                } else {
                    body.push(Task::SweepUp {
                        n,
                        k,
                        i: 1,
                        stop: k - 2,
                        calls: None,
                    });
                    body.push(mv(n, k - 1));
                }
                body.push(mv(k, 0));
                if k > 3 {
                    body.push(Task::Call(Gen::Rev1Odd, n - 1, k - 1));
                }
            }
            Gen::Fwd0Odd => {
                body.push(Task::Call(Gen::Fwd1Even, n - 1, k - 1));
                body.push(mv(k, k - 1));
                if k < n - 1 {
                    body.push(Task::Call(Gen::Rev1Odd, n - 1, k));
                    body.push(Task::SweepDown {
                        n,
                        k,
                        i: k - 2,
                        calls: Some((Gen::Fwd1Odd, Gen::Rev1Odd)),
                    });
                } else {
                    body.push(Task::SweepDown {
                        n,
                        k,
                        i: k - 2,
                        calls: None,
                    });
                }
            }
            Gen::Fwd1Odd => {
                body.push(Task::Call(Gen::Fwd0Even, n - 1, k - 1));
                body.push(mv(n - 1, k - 1));
                if k < n - 1 {
                    body.push(Task::Call(Gen::Fwd1Odd, n - 1, k));
                    body.push(Task::SweepDown {
                        n,
                        k,
                        i: k - 2,
                        calls: Some((Gen::Rev1Odd, Gen::Fwd1Odd)),
                    });
                } else {
                    body.push(Task::SweepDown {
                        n,
                        k,
                        i: k - 2,
                        calls: None,
                    });
                }
            }
            Gen::Rev0Odd => {
                if k < n - 1 {
                    body.push(Task::SweepUp {
                        n,
                        k,
                        i: 1,
                        stop: k - 1,
                        calls: Some((Gen::Fwd1Odd, Gen::Rev1Odd)),
                    });
                    body.push(Task::Call(Gen::Fwd1Odd, n - 1, k));
                } else {
                    body.push(Task::SweepUp {
                        n,
                        k,
                        i: 1,
                        stop: k - 1,
                        calls: None,
                    });
                }
                body.push(mv(k, 0));
                body.push(Task::Call(Gen::Rev1Even, n - 1, k - 1));
            }
            Gen::Rev1Odd => {
                if k < n - 1 {
                    body.push(Task::SweepUp {
                        n,
                        k,
                        i: 1,
                        stop: k - 1,
                        calls: Some((Gen::Rev1Odd, Gen::Fwd1Odd)),
                    });
                    body.push(Task::Call(Gen::Rev1Odd, n - 1, k));
                } else {
                    body.push(Task::SweepUp {
                        n,
                        k,
                        i: 1,
                        stop: k - 1,
                        calls: None,
                    });
                }
                body.push(mv(n - 1, 0));
                body.push(Task::Call(Gen::Rev0Even, n - 1, k - 1));
            }
        }
        self.stack.extend(body.into_iter().rev());
    }

    fn sweep_down(&mut self, n: usize, k: usize, i: usize, calls: Option<(Gen, Gen)>) {
        let mut body: ArrayVec<Task, 5> = ArrayVec::new();
        body.push(mv(n, i));
        if let Some((a, b)) = calls {
            body.push(Task::Call(a, n - 1, k));
            body.push(mv(n, i - 1));
            body.push(Task::Call(b, n - 1, k));
        } else {
            body.push(mv(n, i - 1));
        }
        if i >= 3 {
            body.push(Task::SweepDown {
                n,
                k,
                i: i - 2,
                calls,
            });
        }
        self.stack.extend(body.into_iter().rev());
    }

    fn sweep_up(&mut self, n: usize, k: usize, i: usize, stop: usize, calls: Option<(Gen, Gen)>) {
        if i >= stop {
            return;
        }
        let mut body: ArrayVec<Task, 5> = ArrayVec::new();
        if let Some((a, b)) = calls {
            body.push(Task::Call(a, n - 1, k));
            body.push(mv(n, i));
            body.push(Task::Call(b, n - 1, k));
            body.push(mv(n, i + 1));
        } else {
            body.push(mv(n, i));
            body.push(mv(n, i + 1));
        }
        body.push(Task::SweepUp {
            n,
            k,
            i: i + 2,
            stop,
            calls,
        });
        self.stack.extend(body.into_iter().rev());
    }
}

impl Iterator for PartitionMoves {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        loop {
            match self.stack.pop()? {
                Task::Move(pos, block) => return Some((pos, block)),
                Task::Call(gen, n, k) => self.expand(gen, n, k),
                Task::SweepDown { n, k, i, calls } => self.sweep_down(n, k, i, calls),
                Task::SweepUp {
                    n,
                    k,
                    i,
                    stop,
                    calls,
                } => self.sweep_up(n, k, i, stop, calls),
            }
        }
    }
}

/// Steps through all partitions of `n` elements into `k` blocks,
/// materialized as a restricted-growth string.
#[derive(Clone, Debug)]
pub struct PartitionWalk {
    moves: PartitionMoves,
    cells: Vec<usize>,
}

impl PartitionWalk {
    /// Create a walk starting at the canonical string `0^(n-k) 0 1 .. (k-1)`.
    pub fn new(n: usize, k: usize) -> Self {
        let mut cells = Vec::with_capacity(n);
        cells.resize(n.saturating_sub(k), 0);
        for block in 0..k.min(n) {
            cells.push(block);
        }
        PartitionWalk {
            moves: partition_moves(n, k),
            cells,
        }
    }

    /// Returns the current partition as a restricted-growth string.
    pub fn get(&self) -> &[usize] {
        &self.cells
    }

    /// Returns the size of the partitioned set.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Applies the next move, or returns `false` if the walk is done.
    pub fn advance(&mut self) -> bool {
        match self.moves.next() {
            Some((pos, block)) => {
                self.cells[pos] = block;
                true
            }
            None => false,
        }
    }
}

impl Walk for PartitionWalk {
    type Cell = usize;

    fn get(&self) -> &[usize] {
        Self::get(self)
    }

    fn advance(&mut self) -> bool {
        Self::advance(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count;
    use std::collections::HashSet;

    fn is_restricted_growth(a: &[usize]) -> bool {
        let mut m = 0;
        for &v in a {
            if v > m {
                return false;
            }
            if v == m {
                m += 1;
            }
        }
        true
    }

    fn check(n: usize, k: usize) {
        let mut walk = PartitionWalk::new(n, k);
        let mut seen = HashSet::new();
        assert!(is_restricted_growth(walk.get()));
        seen.insert(walk.get().to_vec());

        let mut moves = partition_moves(n, k);
        loop {
            let before = walk.get().to_vec();
            let next = moves.next();
            if !walk.advance() {
                assert_eq!(next, None);
                break;
            }
            let (pos, block) = next.unwrap();
            assert!(pos < n && block < k, "move ({}, {}) out of range", pos, block);
            assert_ne!(before[pos], block, "no-op move ({}, {})", pos, block);

            let after = walk.get();
            assert!(is_restricted_growth(after), "not RG: {:?}", after);
            assert_eq!(
                after.iter().max().unwrap() + 1,
                k,
                "wrong block count: {:?}",
                after
            );
            assert!(seen.insert(after.to_vec()), "repeated {:?}", after);
        }
        assert_eq!(seen.len() as u64, count::set_partitions(n, k).unwrap());
    }

    macro_rules! exhaustive {
        ($name:ident, $n:expr, $k:expr) => {
            #[test]
            fn $name() {
                check($n, $k);
            }
        };
    }

    // all four parity combinations of (n, k), plus the k = 2 boundary shape
    exhaustive!(walk_5_2, 5, 2);
    exhaustive!(walk_8_2, 8, 2);
    exhaustive!(walk_6_3, 6, 3);
    exhaustive!(walk_7_3, 7, 3);
    exhaustive!(walk_6_4, 6, 4);
    exhaustive!(walk_7_4, 7, 4);
    exhaustive!(walk_7_5, 7, 5);
    exhaustive!(walk_8_6, 8, 6);
    exhaustive!(walk_9_3, 9, 3);
    exhaustive!(walk_8_4, 8, 4);
    exhaustive!(walk_6_5, 6, 5);
    exhaustive!(walk_9_7, 9, 7);

    #[test]
    fn moves_5_2_exact() {
        let moves: Vec<_> = partition_moves(5, 2).collect();
        assert_eq!(
            moves,
            [
                (3, 1),
                (1, 1),
                (2, 1),
                (1, 0),
                (3, 0),
                (1, 1),
                (2, 0),
                (4, 0),
                (2, 1),
                (1, 0),
                (3, 1),
                (1, 1),
                (2, 0),
                (1, 0)
            ]
        );
    }

    #[test]
    fn canonical_start() {
        assert_eq!(PartitionWalk::new(5, 2).get(), [0, 0, 0, 0, 1]);
        assert_eq!(PartitionWalk::new(6, 4).get(), [0, 0, 0, 1, 2, 3]);
        assert_eq!(PartitionWalk::new(4, 4).get(), [0, 1, 2, 3]);
        assert_eq!(PartitionWalk::new(4, 1).get(), [0, 0, 0, 0]);
    }

    #[test]
    fn out_of_domain_is_empty() {
        assert_eq!(partition_moves(5, 1).count(), 0);
        assert_eq!(partition_moves(5, 0).count(), 0);
        assert_eq!(partition_moves(5, 5).count(), 0);
        assert_eq!(partition_moves(5, 6).count(), 0);
        assert_eq!(partition_moves(2, 2).count(), 0);
        assert_eq!(partition_moves(0, 0).count(), 0);
    }

    #[test]
    fn degenerate_walks_hold_one_state() {
        let mut walk = PartitionWalk::new(4, 4);
        assert_eq!(walk.get(), [0, 1, 2, 3]);
        assert!(!walk.advance());

        let mut walk = PartitionWalk::new(4, 1);
        assert_eq!(walk.get(), [0, 0, 0, 0]);
        assert!(!walk.advance());
    }
}
