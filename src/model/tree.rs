//! Validated rooted tree view.
//!
//! Provides [RootedTree], a borrowed view over a [Graph] that has passed the
//! tree-ness check, together with operations that are defined for trees of
//! any arity: node counts, height, binary test and traversals.

use crate::model::binary::BinaryTree;
use crate::model::graph::{Graph, VertexIndex};
use crate::model::iter::{PostOrderIter, PreOrderIter};
use crate::model::node::Node;

// =#========================================================================#=
// ROOTED TREE
// =#========================================================================#=
/// A [Graph] known to be a rooted tree.
///
/// Can only be obtained through [Graph::validate], so every value of this
/// type guarantees a unique root, no cycles and no unreachable nodes.
/// Consequently every node of the graph belongs to the tree and walks from
/// the root terminate.
///
/// # Example
/// ```
/// use treekind::parse_str;
///
/// let graph = parse_str("1,2,3\n2,4").unwrap();
/// let tree = graph.validate().unwrap();
/// assert_eq!(tree.root().id(), 1);
/// assert_eq!(tree.height(), 2);
/// assert!(tree.is_binary());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RootedTree<'g> {
    graph: &'g Graph,
    root_index: VertexIndex,
}

// ============================================================================
// New, Getters / Accessors (pub)
// ============================================================================
impl<'g> RootedTree<'g> {
    /// Wraps a graph whose tree-ness was just checked.
    pub(crate) fn new(graph: &'g Graph, root_index: VertexIndex) -> Self {
        RootedTree { graph, root_index }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Returns the arena index of the root.
    pub fn root_index(&self) -> VertexIndex {
        self.root_index
    }

    /// Returns a reference to the root node.
    pub fn root(&self) -> &'g Node {
        &self.graph[self.root_index]
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.graph.nodes().iter().filter(|node| node.is_leaf()).count()
    }

    /// Returns `true` if every node has at most two children.
    pub fn is_binary(&self) -> bool {
        self.graph.nodes().iter().all(|node| node.num_children() <= 2)
    }

    /// Returns a [BinaryTree] view if this tree is binary, else `None`.
    pub fn as_binary(&self) -> Option<BinaryTree<'g>> {
        self.is_binary().then(|| BinaryTree::new(*self))
    }
}

// ============================================================================
// Height
// ============================================================================
impl<'g> RootedTree<'g> {
    /// Returns the height of this tree, that is, the number of edges on the
    /// longest path from the root to a leaf. A tree consisting of a single
    /// node has height 0.
    pub fn height(&self) -> usize {
        self.height_of(self.root_index)
    }

    /// Returns the height of the subtree rooted at the given node.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn height_of(&self, index: VertexIndex) -> usize {
        self.subtree_heights(index)[index]
    }

    /// Computes the height of every node in the subtree rooted at `start`,
    /// indexed by arena index. Entries outside that subtree stay 0.
    ///
    /// This is the single height definition used both for reporting and for
    /// the AVL balance check.
    pub(crate) fn subtree_heights(&self, start: VertexIndex) -> Vec<usize> {
        let mut heights = vec![0; self.graph.num_nodes()];

        // Children come before parents, so their heights are final when read
        let mut iter = PostOrderIter::new(self.graph, start);
        while let Some(index) = iter.next_index() {
            let height = self.graph[index]
                .children()
                .iter()
                .map(|&child| heights[child] + 1)
                .max()
                .unwrap_or(0);
            heights[index] = height;
        }

        heights
    }
}

// ============================================================================
// Traversals
// ============================================================================
impl<'g> RootedTree<'g> {
    /// Returns an iterator over the tree in pre-order (parents before children).
    pub fn pre_order_iter(&self) -> PreOrderIter<'g> {
        PreOrderIter::new(self.graph, self.root_index)
    }

    /// Returns an iterator over the tree in post-order (children before parents).
    ///
    /// Useful for aggregating data from leaves upward.
    pub fn post_order_iter(&self) -> PostOrderIter<'g> {
        PostOrderIter::new(self.graph, self.root_index)
    }
}
