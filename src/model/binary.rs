//! Binary tree view and the structural predicates defined on it.
//!
//! A [BinaryTree] is a [RootedTree] in which every node has at most two
//! children. The first child is treated as the left child and the second as
//! the right child; a node with a single child only has a left child.
//!
//! Predicates:
//! - [BinaryTree::is_full]: every node has 0 or 2 children
//! - [BinaryTree::is_complete]: level order has no gaps
//! - [BinaryTree::is_bst]: strict search-tree ordering
//! - [BinaryTree::is_avl]: search-tree ordering plus height balance

use crate::model::graph::{Graph, VertexIndex};
use crate::model::iter::{InOrderIter, PostOrderIter, PreOrderIter};
use crate::model::node::{Node, NodeId};
use crate::model::tree::RootedTree;
use serde::Serialize;
use std::collections::VecDeque;
use tracing::trace;

// =#========================================================================#=
// BINARY TREE
// =#========================================================================#=
/// A rooted tree in which no node has more than two children.
///
/// Obtained through [RootedTree::as_binary].
#[derive(Debug, Clone, Copy)]
pub struct BinaryTree<'g> {
    tree: RootedTree<'g>,
}

impl<'g> BinaryTree<'g> {
    /// Wraps a rooted tree whose nodes were just checked to have at most two children.
    pub(crate) fn new(tree: RootedTree<'g>) -> Self {
        BinaryTree { tree }
    }

    /// Returns the underlying [RootedTree].
    pub fn as_rooted(&self) -> &RootedTree<'g> {
        &self.tree
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &'g Graph {
        self.tree.graph()
    }

    /// Returns the arena index of the root.
    pub fn root_index(&self) -> VertexIndex {
        self.tree.root_index()
    }

    /// Returns the height of the tree; see [RootedTree::height].
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

// ============================================================================
// Structural predicates (pub)
// ============================================================================
impl<'g> BinaryTree<'g> {
    /// Returns `true` if every node has either no or exactly two children.
    pub fn is_full(&self) -> bool {
        let full = self
            .graph()
            .nodes()
            .iter()
            .all(|node| matches!(node.num_children(), 0 | 2));
        trace!(full, "full check");
        full
    }

    /// Returns `true` if the tree is complete.
    ///
    /// Walks the tree breadth-first; once a node with fewer than two children
    /// was dequeued, no later node may have any children.
    pub fn is_complete(&self) -> bool {
        let graph = self.graph();
        let mut queue = VecDeque::from([self.root_index()]);
        let mut seen_short_node = false;

        while let Some(index) = queue.pop_front() {
            let node = &graph[index];
            if seen_short_node && !node.is_leaf() {
                trace!(node = node.id(), "complete check failed");
                return false;
            }
            if node.num_children() < 2 {
                seen_short_node = true;
            }
            queue.extend(node.children());
        }

        true
    }

    /// Returns `true` if the tree is a binary search tree.
    ///
    /// Every node value must lie strictly between the bounds inherited from
    /// its ancestors, starting from an unbounded interval at the root. The
    /// left child tightens the upper bound to the parent's value, the right
    /// child the lower bound. Equal values are rejected.
    pub fn is_bst(&self) -> bool {
        let graph = self.graph();
        // (index, exclusive lower bound, exclusive upper bound)
        let mut stack: Vec<(VertexIndex, Option<NodeId>, Option<NodeId>)> =
            vec![(self.root_index(), None, None)];

        while let Some((index, lower, upper)) = stack.pop() {
            let node = &graph[index];
            let id = node.id();
            if lower.is_some_and(|lower| id <= lower) || upper.is_some_and(|upper| id >= upper) {
                trace!(node = id, ?lower, ?upper, "search tree bound violated");
                return false;
            }

            if let Some(left) = node.left() {
                stack.push((left, lower, Some(id)));
            }
            if let Some(right) = node.right() {
                stack.push((right, Some(id), upper));
            }
        }

        true
    }

    /// Returns `true` if at every node the heights of the left and right
    /// subtree differ by at most one.
    ///
    /// Heights count edges as in [RootedTree::height]; a missing subtree
    /// counts as height -1.
    pub fn is_balanced(&self) -> bool {
        let heights = self.tree.subtree_heights(self.root_index());
        let height_of = |child: Option<VertexIndex>| -> i64 {
            child.map_or(-1, |child| heights[child] as i64)
        };

        self.graph().nodes().iter().all(|node| {
            let difference = height_of(node.left()) - height_of(node.right());
            difference.abs() <= 1
        })
    }

    /// Returns `true` if the tree is an AVL tree, that is, a binary search
    /// tree that is height balanced at every node.
    pub fn is_avl(&self) -> bool {
        self.is_bst() && self.is_balanced()
    }
}

// ============================================================================
// Traversals (pub)
// ============================================================================
impl<'g> BinaryTree<'g> {
    /// Returns an iterator over the tree in pre-order (node, left, right).
    pub fn pre_order_iter(&self) -> PreOrderIter<'g> {
        PreOrderIter::new(self.graph(), self.root_index())
    }

    /// Returns an iterator over the tree in in-order (left, node, right).
    pub fn in_order_iter(&self) -> InOrderIter<'g> {
        InOrderIter::new(self.graph(), self.root_index())
    }

    /// Returns an iterator over the tree in post-order (left, right, node).
    pub fn post_order_iter(&self) -> PostOrderIter<'g> {
        PostOrderIter::new(self.graph(), self.root_index())
    }

    /// Returns the node values in pre-order.
    pub fn pre_order(&self) -> Vec<NodeId> {
        self.pre_order_iter().map(Node::id).collect()
    }

    /// Returns the node values in in-order.
    pub fn in_order(&self) -> Vec<NodeId> {
        self.in_order_iter().map(Node::id).collect()
    }

    /// Returns the node values in post-order.
    pub fn post_order(&self) -> Vec<NodeId> {
        self.post_order_iter().map(Node::id).collect()
    }

    /// Returns all three depth-first orders.
    pub fn traversals(&self) -> Traversals {
        Traversals {
            pre_order: self.pre_order(),
            in_order: self.in_order(),
            post_order: self.post_order(),
        }
    }
}

// =#========================================================================#=
// TRAVERSALS
// =#========================================================================#=
/// The three classic depth-first orders of a binary tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversals {
    /// Node, left subtree, right subtree
    pub pre_order: Vec<NodeId>,
    /// Left subtree, node, right subtree
    pub in_order: Vec<NodeId>,
    /// Left subtree, right subtree, node
    pub post_order: Vec<NodeId>,
}
