mod common;

use common::tree_text;
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashSet;
use treekind::analysis::TreeType;
use treekind::writer::to_edge_list;
use treekind::{analyze_str, parse_str};

/// Parent table for a random tree with `n` nodes where no node gets more
/// than `max_children` children, paired with shuffled distinct ids.
fn random_tree(max_children: usize) -> impl Strategy<Value = (Vec<usize>, Vec<i64>)> {
    (1usize..48).prop_flat_map(move |n| {
        let picks = proptest::collection::vec(any::<Index>(), n - 1);
        let ids = Just((0..n as i64).map(|i| i * 3 - 20).collect::<Vec<_>>()).prop_shuffle();
        (picks, ids).prop_map(move |(picks, ids)| {
            let mut num_children = vec![0usize; ids.len()];
            let mut parents = Vec::with_capacity(picks.len());
            for (k, pick) in picks.iter().enumerate() {
                // Positions 0..=k already exist; choose one that still has room
                let open: Vec<usize> = (0..=k).filter(|&p| num_children[p] < max_children).collect();
                let parent = open[pick.index(open.len())];
                num_children[parent] += 1;
                parents.push(parent);
            }
            (parents, ids)
        })
    })
}

proptest! {
    #[test]
    fn traversals_are_permutations_of_all_nodes((parents, ids) in random_tree(2)) {
        let report = analyze_str(tree_text(&parents, &ids)).unwrap();
        let paths = report.paths().unwrap();
        let all: HashSet<i64> = ids.iter().copied().collect();

        for order in [&paths.pre_order, &paths.in_order, &paths.post_order] {
            prop_assert_eq!(order.len(), ids.len());
            prop_assert_eq!(order.iter().copied().collect::<HashSet<_>>(), all.clone());
        }
        prop_assert_eq!(paths.pre_order.first(), Some(&ids[0]));
        prop_assert_eq!(paths.post_order.last(), Some(&ids[0]));
    }

    #[test]
    fn height_zero_iff_root_is_leaf((parents, ids) in random_tree(4)) {
        let graph = parse_str(tree_text(&parents, &ids)).unwrap();
        let tree = graph.validate().unwrap();
        prop_assert_eq!(tree.height() == 0, tree.root().is_leaf());
        prop_assert!(tree.height() < tree.num_nodes());
    }

    #[test]
    fn analysis_is_deterministic((parents, ids) in random_tree(3)) {
        let text = tree_text(&parents, &ids);
        prop_assert_eq!(analyze_str(&text).unwrap(), analyze_str(&text).unwrap());
    }

    #[test]
    fn predicate_implications((parents, ids) in random_tree(2)) {
        let graph = parse_str(tree_text(&parents, &ids)).unwrap();
        let tree = graph.validate().unwrap();
        let binary = tree.as_binary().unwrap();

        if binary.is_avl() {
            prop_assert!(binary.is_bst());
        }
        if binary.is_full() {
            prop_assert!(graph.nodes().iter().all(|n| n.num_children() == 0 || n.num_children() == 2));
        }
        if binary.is_bst() {
            let in_order = binary.in_order();
            prop_assert!(in_order.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn classification_matches_predicates((parents, ids) in random_tree(3)) {
        let report = analyze_str(tree_text(&parents, &ids)).unwrap();
        let graph = parse_str(tree_text(&parents, &ids)).unwrap();
        let tree = graph.validate().unwrap();

        match tree.as_binary() {
            None => prop_assert_eq!(report.tree_type(), TreeType::NonBinary),
            Some(binary) => {
                prop_assert!(report.tree_type().is_binary());
                prop_assert_eq!(report.tree_type() == TreeType::Avl, binary.is_avl());
            }
        }
    }

    #[test]
    fn edge_list_round_trip((parents, ids) in random_tree(3)) {
        let graph = parse_str(tree_text(&parents, &ids)).unwrap();
        let written = to_edge_list(&graph);
        prop_assert_eq!(
            analyze_str(&written).unwrap(),
            analyze_str(tree_text(&parents, &ids)).unwrap()
        );
    }

    #[test]
    fn extra_root_breaks_tree((parents, ids) in random_tree(2)) {
        // A second, unconnected root means no unique root
        let text = format!("{}\n1000,1001", tree_text(&parents, &ids));
        prop_assert_eq!(analyze_str(text).unwrap().tree_type(), TreeType::NotATree);
    }
}
