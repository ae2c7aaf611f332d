//! Structural category of an analysed input.

use serde::{Serialize, Serializer};
use std::fmt;

/// Structural category assigned by [classify](crate::analysis::classify).
///
/// Variants are listed in classification priority: the first one that
/// applies wins. [Display](fmt::Display) and serialization both produce the
/// human-readable label, e.g. `"AVL (balanced) tree"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeType {
    /// No unique root, a cycle, or unreachable nodes
    NotATree,
    /// Some node has more than two children
    NonBinary,
    /// Binary search tree that is height balanced at every node
    Avl,
    /// Binary search tree that is not balanced
    BinarySearch,
    /// Every node has 0 or 2 children and the level order has no gaps
    FullAndComplete,
    /// Every node has 0 or 2 children
    Full,
    /// Level order has no gaps
    Complete,
    /// Binary, but none of the above
    Binary,
}

impl TreeType {
    /// Returns the human-readable label of this category.
    pub fn label(&self) -> &'static str {
        match self {
            TreeType::NotATree => "not a tree",
            TreeType::NonBinary => "non-binary tree",
            TreeType::Avl => "AVL (balanced) tree",
            TreeType::BinarySearch => "binary search tree",
            TreeType::FullAndComplete => "full and complete binary tree",
            TreeType::Full => "full binary tree",
            TreeType::Complete => "complete binary tree",
            TreeType::Binary => "binary tree",
        }
    }

    /// Returns `true` unless this is [TreeType::NotATree].
    pub fn is_tree(&self) -> bool {
        !matches!(self, TreeType::NotATree)
    }

    /// Returns `true` for all categories of binary trees.
    pub fn is_binary(&self) -> bool {
        !matches!(self, TreeType::NotATree | TreeType::NonBinary)
    }
}

impl fmt::Display for TreeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for TreeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
