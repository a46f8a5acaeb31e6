#![deny(missing_docs)]

//! The **gray-walks** crate enumerates combinations, set partitions, set
//! bipartitions, subsets and permutations in minimal-change ("Gray code")
//! order: each object differs from its predecessor by a single cheap edit.
//!
//! The enumerators never materialize the objects themselves. Instead they
//! yield the sequence of edits — a transposition of two positions, a move of
//! one element into another block, a flip of one bit — and the caller applies
//! each edit to its own representation. Replaying the whole sequence from the
//! canonical starting object visits every object of the family exactly once.
//!
//! Each family comes in two surfaces:
//!
//! * an *edit iterator* (`combination_swaps`, `partition_moves`,
//!   `bipartition_flips`, `subset_flips`, `plain_changes`, `ehrlich_swaps`)
//!   yielding raw edits, and
//! * a *walk* (`CombinationWalk`, `PartitionWalk`, `BipartitionWalk`,
//!   `SubsetWalk`, `PermutationWalk`) that owns a materialized state and
//!   applies the edits one `advance`() at a time.
//!
//! Set partitions are represented as restricted-growth strings: one value per
//! element, where two elements share a value exactly when they share a block,
//! and block labels are numbered in order of first appearance.
//!
//! The combination sequence is the homogeneous revolving-door order of Eades
//! and McKay; the set-partition sequence follows Ruskey's sublist-reversal
//! construction; permutations use the Steinhaus-Johnson-Trotter plain-change
//! order and Ehrlich's star-transposition variant.
//!
//! # How to use
//!
//! To step through the objects of a family, build the matching walk and call
//! `advance`() until it returns `false`, reading the current object with
//! `get`() — all walks implement the [`Walk`] trait. To drive your own data
//! structure, consume the edit iterator directly and apply each edit
//! yourself.
//!
//! The expected number of objects is available from the [`count`] module
//! (`count::combinations`, `count::set_partitions`,
//! `count::set_bipartitions`); an enumeration has exactly one fewer edit
//! than it has objects.
//!
//! Arguments outside the interesting domain (`k == 0` or `k >= n` for
//! combinations, `k <= 1` or `k >= n` for partitions, `n < 3` for
//! bipartitions) yield an empty edit sequence: there is at most one object,
//! so there is nothing to edit. This is not an error.

/// Module for the Walk trait
pub mod traits {
    /// Trait for stepping through a materialized minimal-change enumeration.
    ///
    /// A walk owns the current object and a pending edit sequence. `get`()
    /// returns the current object; `advance`() applies the next edit. Every
    /// object of the enumerated family is the value of `get`() exactly once.
    pub trait Walk {
        /// Cell type of the materialized object.
        type Cell;

        /// Returns the current object.
        fn get(&self) -> &[Self::Cell];

        /// Applies the next edit, or returns `false` if the walk is done.
        fn advance(&mut self) -> bool;
    }
}

pub mod count;

mod bipartitions;
mod combinations;
mod partitions;
mod permutations;
mod subsets;

pub use crate::bipartitions::{bipartition_flips, BipartitionFlips, BipartitionWalk};
pub use crate::combinations::{
    combination_swaps, CombinationSwaps, CombinationWalk, GenCombinationWalk,
};
pub use crate::partitions::{partition_moves, PartitionMoves, PartitionWalk};
pub use crate::permutations::{
    ehrlich_swaps, plain_changes, plain_changes_cycle, EhrlichSwaps, PermutationWalk, PlainChanges,
    PlainChangesCycle,
};
pub use crate::subsets::{subset_flips, GenSubsetWalk, SubsetFlips, SubsetWalk};
pub use crate::traits::Walk;
