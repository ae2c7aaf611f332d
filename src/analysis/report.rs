//! Result object of an analysis, ready for JSON serialization.

use crate::analysis::tree_type::TreeType;
use crate::error::{AnalysisError, TreeViolation};
use crate::model::Traversals;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Outcome of analysing one edge-list input.
///
/// Serializes as
/// ```json
/// {
///   "tree_type": "AVL (balanced) tree",
///   "is_tree": true,
///   "height": 2,
///   "paths": { "pre_order": [2, 1, 3], "in_order": [1, 2, 3], "post_order": [1, 3, 2] }
/// }
/// ```
/// A value that is undefined for the input is replaced by
/// `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    tree_type: TreeType,
    is_tree: bool,
    #[serde(serialize_with = "serialize_outcome")]
    height: Result<usize, AnalysisError>,
    #[serde(serialize_with = "serialize_outcome")]
    paths: Result<Traversals, AnalysisError>,
}

impl AnalysisReport {
    /// Creates the report of a structure that passed the tree-ness check.
    pub(crate) fn for_tree(
        tree_type: TreeType,
        height: usize,
        paths: Result<Traversals, AnalysisError>,
    ) -> Self {
        AnalysisReport {
            tree_type,
            is_tree: true,
            height: Ok(height),
            paths,
        }
    }

    /// Creates the report of a structure that failed the tree-ness check.
    pub(crate) fn not_a_tree(violation: TreeViolation) -> Self {
        AnalysisReport {
            tree_type: TreeType::NotATree,
            is_tree: false,
            height: Err(AnalysisError::NotATree(violation)),
            paths: Err(AnalysisError::NotATree(violation)),
        }
    }

    /// Returns the structural category.
    pub fn tree_type(&self) -> TreeType {
        self.tree_type
    }

    /// Returns whether the input passed the tree-ness check.
    pub fn is_tree(&self) -> bool {
        self.is_tree
    }

    /// Returns the height, or why it is undefined.
    pub fn height(&self) -> Result<usize, &AnalysisError> {
        self.height.as_ref().copied()
    }

    /// Returns the traversals, or why they are undefined.
    pub fn paths(&self) -> Result<&Traversals, &AnalysisError> {
        self.paths.as_ref()
    }

    /// Serializes this report as a single-line JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serializes this report as an indented JSON string.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Writes the value itself, or `{"error": message}` in place of an undefined value.
fn serialize_outcome<T, S>(outcome: &Result<T, AnalysisError>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match outcome {
        Ok(value) => value.serialize(serializer),
        Err(err) => {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("error", &err.to_string())?;
            map.end()
        }
    }
}
