//! Parser for edge-list tree files.
//!
//! This module provides [EdgeListParser] to turn edge-list text into a
//! [Graph](crate::model::Graph), along with error reporting via [ParsingError].

pub mod edge_list;
pub mod parsing_error;

pub use edge_list::{DuplicateParentPolicy, EdgeListParser};
pub use parsing_error::{ParsingError, ParsingErrorType};
