//! Error types for edge-list parsing.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting errors that occur while reading edge-list text.

use crate::model::NodeId;
use std::error::Error;
use std::fmt;

/// Maximum number of characters of the offending line kept as context
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Error types that can occur during edge-list parsing.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ParsingErrorType {
    #[error("IO error - {0}")]
    IoError(String),
    #[error("Empty line")]
    EmptyLine,
    #[error("Empty node id")]
    EmptyToken,
    #[error("Invalid node id '{0}'")]
    InvalidNodeId(String),
    #[error("Parent {0} already listed on an earlier line")]
    DuplicateParent(NodeId),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (line number and line text).
#[derive(PartialEq, Debug, Clone)]
pub struct ParsingError {
    kind: ParsingErrorType,
    line: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type, a 1-based line number and the line text
    pub fn at_line(kind: ParsingErrorType, line: usize, text: &str) -> Self {
        Self {
            kind,
            line,
            context: text.trim().chars().take(DEFAULT_CONTEXT_LENGTH).collect(),
        }
    }

    /// Convenience constructor for EmptyLine
    pub fn empty_line(line: usize) -> Self {
        Self::at_line(ParsingErrorType::EmptyLine, line, "")
    }

    /// Convenience constructor for EmptyToken
    pub fn empty_token(line: usize, text: &str) -> Self {
        Self::at_line(ParsingErrorType::EmptyToken, line, text)
    }

    /// Convenience constructor for InvalidNodeId
    pub fn invalid_node_id(line: usize, text: &str, token: &str) -> Self {
        Self::at_line(ParsingErrorType::InvalidNodeId(token.to_string()), line, text)
    }

    /// Convenience constructor for DuplicateParent
    pub fn duplicate_parent(line: usize, text: &str, parent: NodeId) -> Self {
        Self::at_line(ParsingErrorType::DuplicateParent(parent), line, text)
    }

    /// Create a ParsingError without line context (for IO errors)
    pub fn without_context(kind: ParsingErrorType) -> Self {
        Self {
            kind,
            line: 0,
            context: String::new(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the 1-based line where the error occurred, 0 if not tied to a line
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the (possibly truncated) text of the offending line
    pub fn context(&self) -> &str {
        &self.context
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Main error message
        write!(f, "{}", self.kind)?;

        // Additional position information
        if self.line > 0 {
            write!(f, " at line {}", self.line)?;
        }

        // Additional context if available
        if !self.context.is_empty() {
            write!(f, "\n  Context: {}", self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError::without_context(ParsingErrorType::IoError(err.to_string()))
    }
}
