//! Data model for parsed edge lists and the trees they describe.
//!
//! # Representation
//! A parsed input is a [Graph], which uses the arena pattern to store
//! [Node]s referenced by [VertexIndex]. Nodes are identified by their
//! integer [NodeId]. A graph makes no promise about its shape.
//!
//! Two borrowed views carry proofs about a graph:
//!
//! | View | Obtained via | Guarantees |
//! |------|--------------|------------|
//! | [RootedTree] | [Graph::validate] | unique root, acyclic, connected |
//! | [BinaryTree] | [RootedTree::as_binary] | additionally at most two children per node |
//!
//! Height is available on every [RootedTree]; the structural predicates
//! and the in-order traversal only on a [BinaryTree].

pub mod binary;
pub mod graph;
pub mod iter;
pub mod node;
pub mod tree;

pub use binary::{BinaryTree, Traversals};
pub use graph::{Graph, VertexIndex};
pub use iter::{InOrderIter, PostOrderIter, PreOrderIter};
pub use node::{Node, NodeId};
pub use tree::RootedTree;
