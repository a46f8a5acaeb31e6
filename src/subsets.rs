//! All subsets of `n` positions, in binary reflected Gray code order.
//!
//! `subset_flips(n)` yields positions: flip the bit at the position. Applied
//! in order to the all-zeros string, the flips visit all `2^n` subsets
//! exactly once. This is the classic single-axis reflected recursion — far
//! simpler than the fixed-size engines, and handy for driving any state
//! that toggles.
//!
//! The `n = 0` family has one member (the empty subset) and an empty flip
//! sequence.

use arrayvec::ArrayVec;
use num_traits::{One, Zero};

use crate::traits::Walk;

#[derive(Clone, Copy, Debug)]
enum Task {
    Call(usize),
    Flip(usize),
}

/// Lazy flip sequence, created by [`subset_flips`].
#[derive(Clone, Debug)]
pub struct SubsetFlips {
    stack: Vec<Task>,
}

/// Enumerate all subsets of `n` positions as a sequence of single-position
/// flips, in binary reflected Gray code order.
///
/// Yields `2^n - 1` flips.
pub fn subset_flips(n: usize) -> SubsetFlips {
    let mut stack = Vec::new();
    if n > 0 {
        stack.push(Task::Call(n));
    }
    SubsetFlips { stack }
}

impl Iterator for SubsetFlips {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            match self.stack.pop()? {
                Task::Flip(pos) => return Some(pos),
                Task::Call(1) => return Some(0),
                Task::Call(m) => {
                    let mut body: ArrayVec<Task, 3> = ArrayVec::new();
                    body.push(Task::Call(m - 1));
                    body.push(Task::Flip(m - 1));
                    body.push(Task::Call(m - 1));
                    self.stack.extend(body.into_iter().rev());
                }
            }
        }
    }
}

/// Steps through all subsets of `n` positions, materialized as a string of
/// `one` (in the subset) and `zero` (not in it) symbols.
///
/// Use [`SubsetWalk`] unless you need symbols other than `1u8`/`0u8`.
#[derive(Clone, Debug)]
pub struct GenSubsetWalk<T> {
    flips: SubsetFlips,
    cells: Vec<T>,
    zero: T,
    one: T,
}

/// Steps through all subsets of `n` positions as `u8` bit strings.
pub type SubsetWalk = GenSubsetWalk<u8>;

impl<T: Clone + PartialEq> GenSubsetWalk<T> {
    /// Create a walk over all subsets of `n` positions, starting at the
    /// empty subset (`zero` everywhere).
    pub fn with_symbols(n: usize, one: T, zero: T) -> Self {
        GenSubsetWalk {
            flips: subset_flips(n),
            cells: vec![zero.clone(); n],
            zero,
            one,
        }
    }

    /// Returns the current subset.
    pub fn get(&self) -> &[T] {
        &self.cells
    }

    /// Returns the size of the underlying set.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Applies the next flip, or returns `false` if the walk is done.
    pub fn advance(&mut self) -> bool {
        match self.flips.next() {
            Some(pos) => {
                self.cells[pos] = if self.cells[pos] == self.one {
                    self.zero.clone()
                } else {
                    self.one.clone()
                };
                true
            }
            None => false,
        }
    }
}

impl<T: Clone + PartialEq + Zero + One> GenSubsetWalk<T> {
    /// Create a walk using `T::one()` and `T::zero()` as the symbols.
    pub fn new(n: usize) -> Self {
        Self::with_symbols(n, T::one(), T::zero())
    }
}

impl<T: Clone + PartialEq> Walk for GenSubsetWalk<T> {
    type Cell = T;

    fn get(&self) -> &[T] {
        Self::get(self)
    }

    fn advance(&mut self) -> bool {
        Self::advance(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn flips_4_exact() {
        let flips: Vec<_> = subset_flips(4).collect();
        assert_eq!(flips, [0, 1, 0, 2, 0, 1, 0, 3, 0, 1, 0, 2, 0, 1, 0]);
    }

    #[test]
    fn visits_every_subset_once() {
        for n in 0..11 {
            let mut walk = SubsetWalk::new(n);
            let mut seen = HashSet::new();
            seen.insert(walk.get().to_vec());
            while walk.advance() {
                assert!(seen.insert(walk.get().to_vec()), "repeat at n = {}", n);
            }
            assert_eq!(seen.len(), 1 << n);
        }
    }

    #[test]
    fn empty_set_has_no_flips() {
        assert_eq!(subset_flips(0).count(), 0);
        let mut walk = SubsetWalk::new(0);
        assert!(walk.get().is_empty());
        assert!(!walk.advance());
    }

    #[test]
    fn custom_symbols() {
        let mut walk = GenSubsetWalk::with_symbols(3, '#', '.');
        assert_eq!(walk.get(), ['.', '.', '.']);
        assert!(walk.advance());
        assert_eq!(walk.get(), ['#', '.', '.']);
        assert!(walk.advance());
        assert_eq!(walk.get(), ['#', '#', '.']);
    }
}
