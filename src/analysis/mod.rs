//! Classification of parsed edge lists and assembly of the analysis report.
//!
//! # Classification
//! A structure that fails the tree-ness check is [TreeType::NotATree] and
//! nothing else is computed for it. Otherwise the first matching category
//! in this order wins:
//! 1. some node has more than two children → [TreeType::NonBinary]
//! 2. AVL → [TreeType::Avl]
//! 3. binary search tree → [TreeType::BinarySearch]
//! 4. full and complete → [TreeType::FullAndComplete]
//! 5. full → [TreeType::Full]
//! 6. complete → [TreeType::Complete]
//! 7. otherwise → [TreeType::Binary]
//!
//! A single node is therefore an AVL tree, even though it is also full and
//! complete.

mod report;
mod tree_type;

pub use report::AnalysisReport;
pub use tree_type::TreeType;

use crate::error::AnalysisError;
use crate::model::{Graph, RootedTree};
use crate::parser::{EdgeListParser, ParsingError};
use std::path::Path;
use tracing::debug;

// =#========================================================================#=
// ANALYZER
// =#========================================================================#=
/// Entry point running parser, tree-ness check and classification on one input.
///
/// # Configuration
/// * `with_parser(parser)` - Use a configured [EdgeListParser].
///
/// # Example
/// ```
/// use treekind::analysis::{Analyzer, TreeType};
///
/// let report = Analyzer::new().analyze_str("2,1,3").unwrap();
/// assert_eq!(report.tree_type(), TreeType::Avl);
/// assert_eq!(report.height(), Ok(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    parser: EdgeListParser,
}

impl Analyzer {
    /// Creates a new `Analyzer` with a default [EdgeListParser].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parser used to read input text.
    pub fn with_parser(mut self, parser: EdgeListParser) -> Self {
        self.parser = parser;
        self
    }

    /// Parses and analyses edge-list text.
    ///
    /// # Errors
    /// Fails only with [AnalysisError::MalformedInput]. A structure that is
    /// not a tree, or not binary, still yields a report.
    pub fn analyze_str(&self, text: &str) -> Result<AnalysisReport, AnalysisError> {
        let graph = self.parser.parse(text)?;
        Ok(analyze(&graph))
    }

    /// Reads a UTF-8 file and analyses its content; see [Analyzer::analyze_str].
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisReport, AnalysisError> {
        let text = std::fs::read_to_string(path).map_err(ParsingError::from)?;
        self.analyze_str(&text)
    }
}

// ============================================================================
// Analysis (pub)
// ============================================================================
/// Builds the full report for an already parsed graph.
pub fn analyze(graph: &Graph) -> AnalysisReport {
    let tree = match graph.validate() {
        Ok(tree) => tree,
        Err(violation) => {
            debug!(%violation, "structure is not a tree");
            return AnalysisReport::not_a_tree(violation);
        }
    };

    let tree_type = classify_tree(&tree);
    let paths = tree
        .as_binary()
        .map(|binary| binary.traversals())
        .ok_or(AnalysisError::NoTraversalDefined);

    AnalysisReport::for_tree(tree_type, tree.height(), paths)
}

/// Returns the structural category of a parsed graph.
pub fn classify(graph: &Graph) -> TreeType {
    graph
        .validate()
        .map_or(TreeType::NotATree, |tree| classify_tree(&tree))
}

/// Returns the structural category of a validated tree.
pub fn classify_tree(tree: &RootedTree) -> TreeType {
    let Some(binary) = tree.as_binary() else {
        return TreeType::NonBinary;
    };

    let tree_type = if binary.is_avl() {
        TreeType::Avl
    } else if binary.is_bst() {
        TreeType::BinarySearch
    } else {
        match (binary.is_full(), binary.is_complete()) {
            (true, true) => TreeType::FullAndComplete,
            (true, false) => TreeType::Full,
            (false, true) => TreeType::Complete,
            (false, false) => TreeType::Binary,
        }
    };

    debug!(%tree_type, nodes = tree.num_nodes(), "classified tree");
    tree_type
}
