//! Depth-first iterators over validated trees.
//!
//! All iterators use an explicit stack instead of recursion, so traversing
//! a long chain does not depend on call stack depth. They are only handed
//! out by [RootedTree](crate::model::RootedTree) and
//! [BinaryTree](crate::model::BinaryTree), whose existence guarantees that
//! the walk terminates and visits every node exactly once.

use crate::model::graph::{Graph, VertexIndex};
use crate::model::node::Node;

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for pre-order traversal (parents before children).
///
/// Each node is visited before any of its descendants; children are
/// visited left to right.
#[derive(Debug)]
pub struct PreOrderIter<'g> {
    graph: &'g Graph,
    stack: Vec<VertexIndex>,
}

impl<'g> PreOrderIter<'g> {
    pub(crate) fn new(graph: &'g Graph, start: VertexIndex) -> Self {
        PreOrderIter {
            graph,
            stack: vec![start],
        }
    }
}

impl<'g> Iterator for PreOrderIter<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.graph[index];

        // Push children in reverse, so the leftmost is processed first
        self.stack.extend(node.children().iter().rev());

        Some(node)
    }
}

/// Iterator for post-order traversal (children before parents).
///
/// Each node is visited after all its descendants have been visited;
/// children are visited left to right.
#[derive(Debug)]
pub struct PostOrderIter<'g> {
    graph: &'g Graph,
    stack: Vec<(VertexIndex, bool)>, // (index, children_visited)
}

impl<'g> PostOrderIter<'g> {
    pub(crate) fn new(graph: &'g Graph, start: VertexIndex) -> Self {
        PostOrderIter {
            graph,
            stack: vec![(start, false)],
        }
    }

    /// Advances the traversal and returns the arena index of the next node.
    pub(crate) fn next_index(&mut self) -> Option<VertexIndex> {
        while let Some((index, children_visited)) = self.stack.pop() {
            let node = &self.graph[index];

            if children_visited || node.is_leaf() {
                return Some(index);
            }

            self.stack.push((index, true));
            self.stack
                .extend(node.children().iter().rev().map(|&child| (child, false)));
        }
        None
    }
}

impl<'g> Iterator for PostOrderIter<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.next_index().map(|index| &graph[index])
    }
}

/// Iterator for in-order traversal (left subtree, node, right subtree).
///
/// Only meaningful for binary trees: the first child is the left subtree,
/// the second the right subtree, and further children are ignored.
#[derive(Debug)]
pub struct InOrderIter<'g> {
    graph: &'g Graph,
    stack: Vec<VertexIndex>,
    /// Next subtree whose leftmost path still has to be pushed
    current: Option<VertexIndex>,
}

impl<'g> InOrderIter<'g> {
    pub(crate) fn new(graph: &'g Graph, start: VertexIndex) -> Self {
        InOrderIter {
            graph,
            stack: Vec::new(),
            current: Some(start),
        }
    }
}

impl<'g> Iterator for InOrderIter<'g> {
    type Item = &'g Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(index) = self.current {
            self.stack.push(index);
            self.current = self.graph[index].left();
        }

        let index = self.stack.pop()?;
        let node = &self.graph[index];
        self.current = node.right();

        Some(node)
    }
}
