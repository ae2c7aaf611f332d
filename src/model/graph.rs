//! General node/child structure as parsed from an edge list.
//!
//! A [Graph] is what the parser produces before anything is known about its
//! shape: it may have several roots, cycles, or unreachable parts. Calling
//! [Graph::validate] runs the tree-ness check and, on success, hands out a
//! [RootedTree] view on which all structural predicates are defined.

use crate::error::TreeViolation;
use crate::model::node::{Node, NodeId};
use crate::model::tree::RootedTree;
use std::collections::HashMap;
use tracing::trace;

/// Index of a node in a graph (arena).
pub type VertexIndex = usize;

// =#========================================================================#=
// GRAPH
// =#========================================================================#=
/// An id-keyed adjacency structure, represented using the arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector in order of first appearance in
/// the input and referenced by [VertexIndex]; a map resolves [NodeId]s to
/// indices. Children are indices as well, so no node references another
/// directly and cyclic input needs no special ownership handling.
///
/// # Structure
/// - Every id mentioned in the input has exactly one node.
/// - An id that only ever appears as a child is a node without children.
/// - The number of edges counts every listed child, including repeats.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Nodes of this graph (arena pattern)
    nodes: Vec<Node>,

    /// Lookup from node id to arena index
    lookup: HashMap<NodeId, VertexIndex>,

    /// Number of parent-child pairs added
    num_edges: usize,
}

// ============================================================================
// New, Construction, Getters (pub)
// ============================================================================
impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `num_nodes` nodes.
    pub fn with_capacity(num_nodes: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(num_nodes),
            lookup: HashMap::with_capacity(num_nodes),
            num_edges: 0,
        }
    }

    /// Returns the index of the node with the given id, creating it first if needed.
    pub fn get_or_insert(&mut self, id: NodeId) -> VertexIndex {
        if let Some(&index) = self.lookup.get(&id) {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(Node::new(id));
        self.lookup.insert(id, index);
        index
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is not a valid index.
    pub fn add_edge(&mut self, parent: VertexIndex, child: VertexIndex) {
        self.nodes[parent].push_child(child);
        self.num_edges += 1;
    }

    /// Returns `true` if a node with the given id exists.
    pub fn contains(&self, id: NodeId) -> bool {
        self.lookup.contains_key(&id)
    }

    /// Returns the arena index of the node with the given id.
    pub fn index_of(&self, id: NodeId) -> Option<VertexIndex> {
        self.lookup.get(&id).copied()
    }

    /// Returns the node with the given id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    /// Returns the node at the given arena index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: VertexIndex) -> &Node {
        &self[index]
    }

    /// Returns all nodes in arena order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of parent-child pairs.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl std::ops::Index<VertexIndex> for Graph {
    type Output = Node;

    fn index(&self, index: VertexIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Root finding and tree-ness (pub)
// ============================================================================
impl Graph {
    /// Returns, for every arena index, whether that node is listed as some node's child.
    pub fn child_flags(&self) -> Vec<bool> {
        let mut is_child = vec![false; self.nodes.len()];
        for node in &self.nodes {
            for &child in node.children() {
                is_child[child] = true;
            }
        }
        is_child
    }

    /// Returns the indices of all nodes that are no other node's child, in arena order.
    pub fn root_candidates(&self) -> Vec<VertexIndex> {
        self.child_flags()
            .into_iter()
            .enumerate()
            .filter_map(|(index, is_child)| (!is_child).then_some(index))
            .collect()
    }

    /// Returns the index of the root, that is, the unique node that is no
    /// other node's child.
    ///
    /// # Returns
    /// * `Some(index)` - exactly one candidate exists
    /// * `None` - no node or several nodes qualify
    pub fn find_root(&self) -> Option<VertexIndex> {
        match self.root_candidates().as_slice() {
            [root] => Some(*root),
            _ => None,
        }
    }

    /// Checks whether this graph is a rooted tree and returns a [RootedTree] view if so.
    ///
    /// Checks:
    /// - There is a unique root
    /// - Walking from the root never reaches a node twice (no cycle, no shared child)
    /// - The walk reaches every node (no disconnected part)
    ///
    /// The walk uses an explicit stack, so deep inputs cannot overflow the call stack.
    pub fn validate(&self) -> Result<RootedTree<'_>, TreeViolation> {
        let candidates = self.root_candidates();
        let root = match candidates.as_slice() {
            [root] => *root,
            _ => {
                trace!(candidates = candidates.len(), "no unique root");
                return Err(TreeViolation::NoUniqueRoot {
                    candidates: candidates.len(),
                });
            }
        };

        let mut visited = vec![false; self.nodes.len()];
        let mut num_visited = 0;
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            if visited[index] {
                trace!(node = self[index].id(), "node visited twice");
                return Err(TreeViolation::Cycle {
                    at: self[index].id(),
                });
            }
            visited[index] = true;
            num_visited += 1;
            stack.extend(self[index].children().iter().rev());
        }

        if num_visited != self.nodes.len() {
            let unreachable = self.nodes.len() - num_visited;
            trace!(unreachable, "walk from root did not reach every node");
            return Err(TreeViolation::Disconnected { unreachable });
        }

        Ok(RootedTree::new(self, root))
    }

    /// Returns `true` if this graph is a rooted tree; see [Graph::validate].
    pub fn is_tree(&self) -> bool {
        self.validate().is_ok()
    }
}
