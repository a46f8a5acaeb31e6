use std::collections::HashSet;
use std::hash::Hash;

use gray_walks::count::{self, CountTable};
use gray_walks::{
    bipartition_flips, combination_swaps, partition_moves, plain_changes, subset_flips,
    BipartitionWalk, CombinationWalk, PartitionWalk, PermutationWalk, SubsetWalk, Walk,
};
use proptest::prelude::*;

fn walk_states<W>(mut walk: W) -> Vec<Vec<W::Cell>>
where
    W: Walk,
    W::Cell: Clone,
{
    let mut out = vec![walk.get().to_vec()];
    while walk.advance() {
        out.push(walk.get().to_vec());
    }
    out
}

fn all_distinct<T: Eq + Hash + Clone>(states: &[Vec<T>]) -> bool {
    let set: HashSet<Vec<T>> = states.iter().cloned().collect();
    set.len() == states.len()
}

fn combination_domain() -> impl Strategy<Value = (usize, usize)> {
    (2usize..11).prop_flat_map(|n| (Just(n), 1..n))
}

fn partition_domain() -> impl Strategy<Value = (usize, usize)> {
    (3usize..10).prop_flat_map(|n| (Just(n), 2..n))
}

proptest! {
    #[test]
    fn combinations_visit_the_whole_family((n, k) in combination_domain()) {
        let states = walk_states(CombinationWalk::new(n, k));
        prop_assert_eq!(states.len() as u64, count::combinations(n, k).unwrap());
        prop_assert!(all_distinct(&states));
        // one object per edit plus the starting object
        prop_assert_eq!(combination_swaps(n, k).count() + 1, states.len());
    }

    #[test]
    fn combination_swaps_move_exactly_one_marker((n, k) in combination_domain()) {
        let mut cells: Vec<u8> = Vec::new();
        cells.resize(k, 1);
        cells.resize(n, 0);
        for (x, y) in combination_swaps(n, k) {
            prop_assert!(x < n && y < n);
            prop_assert_ne!(cells[x], cells[y]);
            cells.swap(x, y);
            prop_assert_eq!(cells.iter().filter(|c| **c == 1).count(), k);
        }
    }

    #[test]
    fn partitions_visit_the_whole_family((n, k) in partition_domain()) {
        let states = walk_states(PartitionWalk::new(n, k));
        prop_assert_eq!(states.len() as u64, count::set_partitions(n, k).unwrap());
        prop_assert!(all_distinct(&states));
    }

    #[test]
    fn partition_moves_change_one_position((n, k) in partition_domain()) {
        let mut walk = PartitionWalk::new(n, k);
        let mut moves = partition_moves(n, k);
        loop {
            let before = walk.get().to_vec();
            if !walk.advance() {
                prop_assert_eq!(moves.next(), None);
                break;
            }
            let (pos, block) = moves.next().unwrap();
            let after = walk.get();
            for i in 0..n {
                if i == pos {
                    prop_assert_eq!(after[i], block);
                    prop_assert_ne!(before[i], block);
                } else {
                    prop_assert_eq!(after[i], before[i]);
                }
            }
        }
    }

    #[test]
    fn bipartitions_agree_with_the_general_engine(n in 3usize..12) {
        let flips: Vec<_> = bipartition_flips(n).collect();
        let moves: Vec<_> = partition_moves(n, 2).collect();
        prop_assert_eq!(flips.len(), moves.len());
        for (f, (p, _)) in flips.iter().zip(moves.iter()) {
            prop_assert_eq!(f, p);
        }
        let states = walk_states(BipartitionWalk::new(n));
        prop_assert_eq!(states.len() as u64, count::set_bipartitions(n).unwrap());
        prop_assert!(all_distinct(&states));
    }

    #[test]
    fn subsets_visit_the_whole_powerset(n in 0usize..11) {
        let states = walk_states(SubsetWalk::new(n));
        prop_assert_eq!(states.len(), 1usize << n);
        prop_assert!(all_distinct(&states));
    }

    #[test]
    fn permutations_visit_the_whole_family(n in 1usize..7) {
        let states = walk_states(PermutationWalk::new(n));
        prop_assert_eq!(states.len(), (1..=n).product::<usize>());
        prop_assert!(all_distinct(&states));
        prop_assert_eq!(plain_changes(n).count() + 1, states.len());
    }

    #[test]
    fn engines_are_deterministic((n, k) in combination_domain()) {
        let first: Vec<_> = combination_swaps(n, k).collect();
        let second: Vec<_> = combination_swaps(n, k).collect();
        prop_assert_eq!(first, second);

        let first: Vec<_> = partition_moves(n, k).collect();
        let second: Vec<_> = partition_moves(n, k).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn counts_match_between_table_and_one_off((n, k) in combination_domain()) {
        let mut table = CountTable::<u64>::new();
        prop_assert_eq!(table.combinations(n, k), count::combinations(n, k));
        prop_assert_eq!(table.set_partitions(n, k), count::set_partitions(n, k));
    }
}

#[test]
fn out_of_domain_inputs_yield_empty_sequences() {
    assert_eq!(combination_swaps(6, 0).count(), 0);
    assert_eq!(combination_swaps(6, 6).count(), 0);
    assert_eq!(combination_swaps(6, 9).count(), 0);
    assert_eq!(partition_moves(6, 1).count(), 0);
    assert_eq!(partition_moves(6, 6).count(), 0);
    assert_eq!(bipartition_flips(2).count(), 0);
    assert_eq!(subset_flips(0).count(), 0);
    assert_eq!(plain_changes(1).count(), 0);
}
