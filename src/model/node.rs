//! Node type of a parsed edge-list graph.

use crate::model::graph::VertexIndex;

/// Integer identity of a node, exactly as written in the input.
pub type NodeId = i64;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node of a parsed [Graph](crate::model::Graph).
///
/// The node is identified by its [NodeId]; there is at most one node per id
/// in a graph. Children are stored as arena indices into the same graph, in
/// the order they were listed in the input.
///
/// # Invariants
/// - `id` is unique within its graph
/// - `children` are valid indices of the owning graph
/// - Once the surrounding tree is known to be binary, `children[0]` is the
///   left child and `children[1]` the right child; a single child is a left child
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Node {
    /// Value and identity of this node
    id: NodeId,
    /// Indices of child nodes, left to right
    children: Vec<VertexIndex>,
}

impl Node {
    /// Creates a new node without children.
    pub(crate) fn new(id: NodeId) -> Self {
        Node {
            id,
            children: Vec::new(),
        }
    }

    /// Returns the id (value) of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the arena indices of the children, left to right.
    pub fn children(&self) -> &[VertexIndex] {
        &self.children
    }

    /// Returns the number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the first child, if any.
    pub fn left(&self) -> Option<VertexIndex> {
        self.children.first().copied()
    }

    /// Returns the second child, if any.
    pub fn right(&self) -> Option<VertexIndex> {
        self.children.get(1).copied()
    }

    /// Appends a child to the end of the children list.
    pub(crate) fn push_child(&mut self, child: VertexIndex) {
        self.children.push(child);
    }
}
