//! Combinations in homogeneous revolving-door order.
//!
//! `combination_swaps(n, k)` yields transpositions `(x, y)`: swap the values
//! at positions `x` and `y`. Applied in order to the bit string
//! `1^k 0^(n-k)`, the swaps visit every `k`-element subset of `n` positions
//! exactly once, each differing from its predecessor by moving a single one.
//! [`GenCombinationWalk`] does the replay for you.
//!
//! The order is the homogeneous revolving-door sequence of Eades and McKay
//! ("An algorithm for generating subsets of fixed size with a strong minimal
//! change property"). It decomposes into four mutually recursive
//! sub-sequences, split by the parity of `k` and by traversal direction. The
//! recursion runs on an explicit work stack, so large `n` cannot exhaust the
//! machine stack.

use arrayvec::ArrayVec;
use num_traits::{One, Zero};

use crate::traits::Walk;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gen {
    FwdEven,
    FwdOdd,
    RevEven,
    RevOdd,
}

// Pending work; the top of the stack runs first. A Call expands into the
// body of its sub-sequence, runs re-push themselves until exhausted.
#[derive(Clone, Copy, Debug)]
enum Task {
    Call(Gen, usize, usize),
    Swap(usize, usize),
    // (i, i+1) for i ascending through `last`
    RunUp(usize, usize),
    // (i, i-1) for i descending through `last`
    RunDown(usize, usize),
}

/// Lazy revolving-door swap sequence, created by [`combination_swaps`].
#[derive(Clone, Debug)]
pub struct CombinationSwaps {
    stack: Vec<Task>,
}

/// Enumerate `k` out of `n` combinations as a sequence of transpositions.
///
/// Yields `binomial(n, k) - 1` swaps when `0 < k < n`; anything else yields
/// an empty sequence, since a family with at most one member needs no edits.
pub fn combination_swaps(n: usize, k: usize) -> CombinationSwaps {
    let mut stack = Vec::new();
    if k == 0 || k >= n {
        // at most one combination
    } else if k == 1 {
        // a lone one walking right across the string
        stack.push(Task::RunUp(0, n - 2));
    } else if k % 2 == 0 {
        stack.push(Task::Call(Gen::FwdEven, n, k));
    } else {
        stack.push(Task::Call(Gen::FwdOdd, n, k));
    }
    CombinationSwaps { stack }
}

impl CombinationSwaps {
    // Push the body of one sub-sequence. Bodies are written in execution
    // order and reversed onto the stack; every Call keeps 0 < k < n.
    fn expand(&mut self, gen: Gen, n: usize, k: usize) {
        let mut body: ArrayVec<Task, 5> = ArrayVec::new();
        match gen {
            Gen::FwdEven => {
                if k >= n - 1 {
                    body.push(Task::Swap(n - 2, n - 1));
                } else {
                    body.push(Task::Call(Gen::FwdEven, n - 1, k));
                    body.push(Task::Swap(n - 2, n - 1));
                    if k == 2 {
                        body.push(Task::RunDown(n - 3, 1));
                    } else {
                        body.push(Task::Call(Gen::RevOdd, n - 2, k - 1));
                    }
                }
                body.push(Task::Swap(k - 2, n - 2));
                if k != 2 {
                    body.push(Task::Call(Gen::FwdEven, n - 2, k - 2));
                }
            }
            Gen::FwdOdd => {
                if k < n - 1 {
                    body.push(Task::Call(Gen::FwdOdd, n - 1, k));
                    body.push(Task::Swap(n - 2, n - 1));
                    body.push(Task::Call(Gen::RevEven, n - 2, k - 1));
                } else {
                    body.push(Task::Swap(n - 2, n - 1));
                }
                body.push(Task::Swap(k - 2, n - 2));
                if k == 3 {
                    body.push(Task::RunUp(0, n - 4));
                } else {
                    body.push(Task::Call(Gen::FwdOdd, n - 2, k - 2));
                }
            }
            Gen::RevEven => {
                if k != 2 {
                    body.push(Task::Call(Gen::RevEven, n - 2, k - 2));
                }
                body.push(Task::Swap(n - 2, k - 2));
                if k < n - 1 {
                    if k != 2 {
                        body.push(Task::Call(Gen::FwdOdd, n - 2, k - 1));
                    } else {
                        body.push(Task::RunUp(0, n - 4));
                    }
                    body.push(Task::Swap(n - 1, n - 2));
                    body.push(Task::Call(Gen::RevEven, n - 1, k));
                } else {
                    body.push(Task::Swap(n - 1, n - 2));
                }
            }
            Gen::RevOdd => {
                if k == 3 {
                    body.push(Task::RunDown(n - 3, 1));
                } else {
                    body.push(Task::Call(Gen::RevOdd, n - 2, k - 2));
                }
                body.push(Task::Swap(n - 2, k - 2));
                if k >= n - 1 {
                    body.push(Task::Swap(n - 1, n - 2));
                } else {
                    body.push(Task::Call(Gen::FwdEven, n - 2, k - 1));
                    body.push(Task::Swap(n - 1, n - 2));
                    body.push(Task::Call(Gen::RevOdd, n - 1, k));
                }
            }
        }
        self.stack.extend(body.into_iter().rev());
    }
}

impl Iterator for CombinationSwaps {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        loop {
            match self.stack.pop()? {
                Task::Swap(x, y) => return Some((x, y)),
                Task::RunUp(i, last) => {
                    if i < last {
                        self.stack.push(Task::RunUp(i + 1, last));
                    }
                    return Some((i, i + 1));
                }
                Task::RunDown(i, last) => {
                    if i > last {
                        self.stack.push(Task::RunDown(i - 1, last));
                    }
                    return Some((i, i - 1));
                }
                Task::Call(gen, n, k) => self.expand(gen, n, k),
            }
        }
    }
}

/// Steps through all `k` out of `n` combinations, materialized as a string
/// of `one` and `zero` symbols.
///
/// Starts at `one` repeated `k` times followed by `zero` repeated `n - k`
/// times; each `advance`() applies one revolving-door swap.
///
/// Use [`CombinationWalk`] unless you need symbols other than `1u8`/`0u8`.
#[derive(Clone, Debug)]
pub struct GenCombinationWalk<T> {
    swaps: CombinationSwaps,
    cells: Vec<T>,
}

/// Steps through all `k` out of `n` combinations as `u8` bit strings.
pub type CombinationWalk = GenCombinationWalk<u8>;

impl<T: Clone> GenCombinationWalk<T> {
    /// Create a walk over the combinations of `k` out of `n` positions,
    /// marking chosen positions with `one` and the rest with `zero`.
    pub fn with_symbols(n: usize, k: usize, one: T, zero: T) -> Self {
        let mut cells = Vec::with_capacity(n);
        cells.resize(k.min(n), one);
        cells.resize(n, zero);
        GenCombinationWalk {
            swaps: combination_swaps(n, k),
            cells,
        }
    }

    /// Returns the current combination.
    pub fn get(&self) -> &[T] {
        &self.cells
    }

    /// Returns the size of the underlying set.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Applies the next swap, or returns `false` if the walk is done.
    pub fn advance(&mut self) -> bool {
        match self.swaps.next() {
            Some((x, y)) => {
                self.cells.swap(x, y);
                true
            }
            None => false,
        }
    }
}

impl<T: Clone + Zero + One> GenCombinationWalk<T> {
    /// Create a walk using `T::one()` and `T::zero()` as the symbols.
    pub fn new(n: usize, k: usize) -> Self {
        Self::with_symbols(n, k, T::one(), T::zero())
    }
}

impl<T: Clone> Walk for GenCombinationWalk<T> {
    type Cell = T;

    fn get(&self) -> &[T] {
        Self::get(self)
    }

    fn advance(&mut self) -> bool {
        Self::advance(self)
    }
}
