//! Treekind is a library to classify rooted trees given as integer edge lists.
//!
//! This crate parses edge-list text into an in-memory graph, checks that it
//! is a rooted tree, and determines its structural category together with
//! its height and depth-first traversals.
//! Core functionality provided:
//! - Parser: Each line `parent,child,child,...` lists a node and its
//!   children from left to right. See [crate::parser].
//! - Tree-ness check: Unique root, no cycles, every node reachable.
//! - Classification into non-binary, AVL, binary search, full and complete,
//!   full, complete, or generic binary tree. See [crate::analysis].
//! - Height (in edges) and pre-, in-, and post-order traversals.
//! - Report: All results combined in a JSON-serializable [AnalysisReport].
//! - Model: Arena-based [Graph] with borrowed views [RootedTree] and
//!   [BinaryTree] proving tree-ness and binarity. See [crate::model].
//!
//! Limitations:
//! - Node ids are 64-bit signed integers
//! - Only rooted trees are classified; other graphs are reported as "not a tree"
//!
//! # Usage patterns
//! 1. Quick functions [analyze_str] and [analyze_file] run the whole pipeline.
//! 2. [parse_str] and [parse_file] give access to the [Graph] for custom checks.
//! 3. Configure an [Analyzer] with an
//!    [EdgeListParser](crate::parser::EdgeListParser) for control over how
//!    repeated parents are handled.
//!
//! ## Example
//! ```
//! use treekind::{analyze_str, analysis::TreeType};
//!
//! let report = analyze_str("1,2,3\n2,4,5\n3,6,7").unwrap();
//! assert_eq!(report.tree_type(), TreeType::FullAndComplete);
//! assert_eq!(report.height(), Ok(2));
//! assert_eq!(report.paths().unwrap().pre_order, vec![1, 2, 4, 5, 3, 6, 7]);
//! ```
//!
//! ## Example Parser Configuration
//! ```
//! use treekind::analysis::Analyzer;
//! use treekind::parser::{DuplicateParentPolicy, EdgeListParser};
//!
//! let parser = EdgeListParser::new().with_duplicate_parents(DuplicateParentPolicy::Reject);
//! let result = Analyzer::new().with_parser(parser).analyze_str("1,2\n1,3");
//! assert!(result.is_err());
//! ```

pub mod analysis;
pub mod error;
pub mod model;
pub mod parser;
pub mod writer;

pub use crate::analysis::{AnalysisReport, Analyzer, TreeType};
pub use crate::error::{AnalysisError, TreeViolation};
pub use crate::model::{BinaryTree, Graph, RootedTree};

use crate::parser::{EdgeListParser, ParsingError};
use std::path::Path;

// ============================================================================
// Quick Parsing API
// ============================================================================
/// Parses edge-list text using default settings, returning a [Graph].
pub fn parse_str<S: AsRef<str>>(text: S) -> Result<Graph, ParsingError> {
    EdgeListParser::new().parse(text.as_ref())
}

/// Parses an edge-list file using default settings, returning a [Graph].
///
/// The file must be valid UTF-8.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Graph, ParsingError> {
    let text = std::fs::read_to_string(path)?;
    parse_str(text)
}

// ============================================================================
// Quick Analysis API
// ============================================================================
/// Analyses edge-list text using default settings, returning an [AnalysisReport].
///
/// See [Analyzer::analyze_str] for full documentation.
pub fn analyze_str<S: AsRef<str>>(text: S) -> Result<AnalysisReport, AnalysisError> {
    Analyzer::new().analyze_str(text.as_ref())
}

/// Analyses an edge-list file using default settings, returning an [AnalysisReport].
///
/// See [Analyzer::analyze_file] for full documentation.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<AnalysisReport, AnalysisError> {
    Analyzer::new().analyze_file(path)
}
