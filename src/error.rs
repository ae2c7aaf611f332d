//! Error types of the analysis engine.
//!
//! - [AnalysisError] is what callers of the engine see. Only
//!   [AnalysisError::MalformedInput] aborts an analysis; the other two kinds
//!   are recorded inside an [AnalysisReport](crate::analysis::AnalysisReport)
//!   in place of the value they make undefined.
//! - [TreeViolation] explains why a parsed [Graph](crate::model::Graph)
//!   failed the tree-ness check.
//!
//! Errors raised while reading the input text are
//! [ParsingError](crate::parser::ParsingError)s.

use crate::model::NodeId;
use crate::parser::ParsingError;
use thiserror::Error;

/// Errors produced while analysing an edge-list tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The input text is not a comma-separated integer list per line.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] ParsingError),

    /// The parsed structure is not a rooted tree, so height and traversals are undefined.
    #[error("not a tree: {0}")]
    NotATree(TreeViolation),

    /// Traversals were requested for a tree with a node of more than two children.
    #[error("tree is not binary; no traversal defined")]
    NoTraversalDefined,
}

/// Reason a parsed graph is not a rooted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeViolation {
    /// Zero or several nodes never appear as a child.
    #[error("expected exactly one root, found {candidates} candidates")]
    NoUniqueRoot {
        /// Number of nodes that are no other node's child
        candidates: usize,
    },

    /// A node was reached twice from the root, through a cycle or a shared child.
    #[error("node {at} is reachable from the root along more than one path")]
    Cycle {
        /// Node visited for the second time
        at: NodeId,
    },

    /// Some nodes cannot be reached from the root.
    #[error("{unreachable} node(s) unreachable from the root")]
    Disconnected {
        /// Number of nodes not reached by the walk from the root
        unreachable: usize,
    },
}
