mod common;

use common::{balanced_bst_text, chain_text};
use treekind::{BinaryTree, Graph, parse_str};

fn graph(text: &str) -> Graph {
    parse_str(text).unwrap()
}

fn binary(graph: &Graph) -> BinaryTree<'_> {
    graph.validate().unwrap().as_binary().unwrap()
}

// ============= Binary Tests =============
#[test]
fn test_is_binary() {
    let g = graph("1,2,3\n2,4");
    assert!(g.validate().unwrap().is_binary());

    let g = graph("1,2,3,4");
    let tree = g.validate().unwrap();
    assert!(!tree.is_binary());
    assert!(tree.as_binary().is_none());
}

// ============= Full Tests =============
#[test]
fn test_is_full() {
    assert!(binary(&graph("1")).is_full());
    assert!(binary(&graph("1,2,3\n2,4,5")).is_full());
    assert!(!binary(&graph("1,2,3\n2,4")).is_full());
    assert!(!binary(&graph("1,2")).is_full());
}

// ============= Complete Tests =============
#[test]
fn test_is_complete() {
    assert!(binary(&graph("1")).is_complete());
    assert!(binary(&graph("1,2")).is_complete());
    assert!(binary(&graph("1,2,3\n2,4")).is_complete());
    assert!(binary(&graph("1,2,3\n2,4,5\n3,6")).is_complete());
}

#[test]
fn test_gap_in_last_level_is_not_complete() {
    // 3 has children although its sibling 2 has none
    assert!(!binary(&graph("1,2,3\n3,6,7")).is_complete());
    // 2 has a single child, after which 3 has children
    assert!(!binary(&graph("1,2,3\n2,4\n3,6")).is_complete());
    // Chain of three
    assert!(!binary(&graph("1,2\n2,3")).is_complete());
}

#[test]
fn test_full_but_not_complete() {
    let g = graph("1,2,3\n3,4,5");
    let tree = binary(&g);
    assert!(tree.is_full());
    assert!(!tree.is_complete());
}

// ============= BST Tests =============
#[test]
fn test_is_bst() {
    assert!(binary(&graph("1")).is_bst());
    assert!(binary(&graph("2,1,3")).is_bst());
    assert!(binary(&graph("8,4,12\n4,2,6\n12,10,14")).is_bst());
    assert!(!binary(&graph("2,3,1")).is_bst());
}

#[test]
fn test_bst_bound_inherited_from_grandparent() {
    // 12 is right of 4, but must stay left of 8
    assert!(!binary(&graph("8,4,10\n4,2,12")).is_bst());
}

#[test]
fn test_single_child_is_left_child() {
    assert!(binary(&graph("2,1")).is_bst());
    assert!(!binary(&graph("1,2")).is_bst());
}

// ============= AVL Tests =============
#[test]
fn test_is_avl() {
    assert!(binary(&graph("1")).is_avl());
    assert!(binary(&graph("2,1")).is_avl());
    assert!(binary(&graph("2,1,3")).is_avl());
    assert!(binary(&graph("4,2,6\n2,1,3\n6,5,7")).is_avl());
}

#[test]
fn test_unbalanced_bst_is_not_avl() {
    // Left chain 3 -> 2 -> 1
    let g = graph("3,2\n2,1");
    let tree = binary(&g);
    assert!(tree.is_bst());
    assert!(!tree.is_balanced());
    assert!(!tree.is_avl());
}

#[test]
fn test_imbalance_below_root() {
    // Root is balanced by height, but node 20 is not
    let g = graph("50,20,80\n20,10\n10,0\n80,70,90\n90,85");
    let tree = binary(&g);
    assert!(tree.is_bst());
    assert!(!tree.is_balanced());
}

#[test]
fn test_balanced_but_not_bst_is_not_avl() {
    let g = graph("1,2,3");
    let tree = binary(&g);
    assert!(tree.is_balanced());
    assert!(!tree.is_avl());
}

#[test]
fn test_generated_balanced_bst() {
    for n in 1..=40 {
        let g = graph(&balanced_bst_text(n));
        assert!(binary(&g).is_avl(), "balanced tree over 1..={n} should be AVL");
    }
}

// ============= Height Tests =============
#[test]
fn test_height() {
    assert_eq!(graph("1").validate().unwrap().height(), 0);
    assert_eq!(graph("1,2").validate().unwrap().height(), 1);
    assert_eq!(graph("1,2,3\n2,4,5\n3,6,7").validate().unwrap().height(), 2);
    assert_eq!(graph("1,2,3,4\n4,5\n5,6").validate().unwrap().height(), 3);
}

#[test]
fn test_height_of_subtree() {
    let g = graph("1,2,3\n2,4\n4,5");
    let tree = g.validate().unwrap();
    assert_eq!(tree.height_of(g.index_of(2).unwrap()), 2);
    assert_eq!(tree.height_of(g.index_of(3).unwrap()), 0);
}

// ============= Traversal Tests =============
#[test]
fn test_traversals_of_perfect_tree() {
    let g = graph("1,2,3\n2,4,5\n3,6,7");
    let tree = binary(&g);
    assert_eq!(tree.pre_order(), vec![1, 2, 4, 5, 3, 6, 7]);
    assert_eq!(tree.in_order(), vec![4, 2, 5, 1, 6, 3, 7]);
    assert_eq!(tree.post_order(), vec![4, 5, 2, 6, 7, 3, 1]);
}

#[test]
fn test_traversals_with_single_children() {
    let g = graph("1,2,3\n2,4\n3,5");
    let tree = binary(&g);
    assert_eq!(tree.pre_order(), vec![1, 2, 4, 3, 5]);
    assert_eq!(tree.in_order(), vec![4, 2, 1, 5, 3]);
    assert_eq!(tree.post_order(), vec![4, 2, 5, 3, 1]);
}

#[test]
fn test_traversals_of_single_node() {
    let g = graph("1");
    let traversals = binary(&g).traversals();
    assert_eq!(traversals.pre_order, vec![1]);
    assert_eq!(traversals.in_order, vec![1]);
    assert_eq!(traversals.post_order, vec![1]);
}

#[test]
fn test_in_order_of_bst_is_sorted() {
    let g = graph(&balanced_bst_text(31));
    let in_order = binary(&g).in_order();
    assert_eq!(in_order, (1..=31).collect::<Vec<_>>());
}

// ============= Deep Tree Tests =============
#[test]
fn test_deep_chain_does_not_overflow() {
    let n = 100_000;
    let g = graph(&chain_text(n));
    let tree = g.validate().unwrap();
    assert_eq!(tree.height(), (n - 1) as usize);

    let binary = tree.as_binary().unwrap();
    assert!(!binary.is_bst());
    assert!(!binary.is_complete());
    assert_eq!(binary.pre_order().len(), n as usize);
    assert_eq!(binary.in_order().first(), Some(&n));
    assert_eq!(binary.post_order().last(), Some(&1));
}
