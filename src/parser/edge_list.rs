//! Parser for edge-list text.
//!
//! # Format
//! * `edge_list ::= record ('\n' record)*`
//! * `record ::= parent (',' child)*`
//! * `parent, child ::= decimal integer (optional sign)`
//!
//! Furthermore:
//! * Whitespace around the whole text, around records and around ids is ignored,
//!   so blank leading or trailing lines and `\r\n` line endings are fine
//! * A blank line between records is an error, as is an empty id (`1,,2` or `1,2,`)
//! * Children are listed left to right; the first child is the left child
//!
//! A parent may appear on more than one line; see [DuplicateParentPolicy].

use crate::model::{Graph, NodeId};
use crate::parser::parsing_error::ParsingError;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Separator between ids of one record
const ID_SEPARATOR: char = ',';

/// Separator between records
const RECORD_SEPARATOR: char = '\n';

// =#========================================================================#=
// DUPLICATE PARENT POLICY
// =#========================================================================#=
/// How to treat a parent id that starts more than one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateParentPolicy {
    /// Children of later records are appended to the children collected so far.
    #[default]
    Append,
    /// A repeated parent is a parsing error.
    Reject,
}

// =#========================================================================#=
// EDGE LIST PARSER
// =#========================================================================#=
/// Parser (configuration) for edge-list text, producing a [Graph].
///
/// # Configuration
/// * `with_duplicate_parents(policy)` - How to handle a parent listed on
///   several lines, defaults to [DuplicateParentPolicy::Append].
///
/// # Example
/// ```
/// use treekind::parser::{DuplicateParentPolicy, EdgeListParser};
///
/// let parser = EdgeListParser::new().with_duplicate_parents(DuplicateParentPolicy::Append);
/// let graph = parser.parse("1,2\n1,3").unwrap();
/// assert_eq!(graph.get(1).unwrap().num_children(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeListParser {
    duplicate_parents: DuplicateParentPolicy,
}

impl EdgeListParser {
    /// Creates a new `EdgeListParser` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how a parent id that appears on several lines is handled.
    pub fn with_duplicate_parents(mut self, policy: DuplicateParentPolicy) -> Self {
        self.duplicate_parents = policy;
        self
    }

    /// Returns the configured [DuplicateParentPolicy].
    pub fn duplicate_parents(&self) -> DuplicateParentPolicy {
        self.duplicate_parents
    }

    /// Parses edge-list text into a [Graph].
    ///
    /// Nodes are created in order of first appearance. Every child id gets a
    /// node, even if it never starts a record.
    ///
    /// # Errors
    /// Returns a [ParsingError] if a line is empty, an id is empty or not an
    /// integer, or a parent repeats under [DuplicateParentPolicy::Reject].
    /// Line numbers in errors refer to the original text.
    pub fn parse(&self, text: &str) -> Result<Graph, ParsingError> {
        // Leading blank lines are trimmed away, but still count for line numbers
        let leading = &text[..text.len() - text.trim_start().len()];
        let line_offset = leading.matches(RECORD_SEPARATOR).count();

        let mut graph = Graph::new();
        let mut parents: HashSet<NodeId> = HashSet::new();
        let mut num_records = 0;

        for (i, line) in text.trim().split(RECORD_SEPARATOR).enumerate() {
            let line_number = line_offset + i + 1;
            let ids = parse_record(line, line_number)?;
            let Some((&parent, children)) = ids.split_first() else {
                return Err(ParsingError::empty_line(line_number));
            };

            if !parents.insert(parent) {
                match self.duplicate_parents {
                    DuplicateParentPolicy::Append => {
                        warn!(parent, line = line_number, "parent listed again, appending children");
                    }
                    DuplicateParentPolicy::Reject => {
                        return Err(ParsingError::duplicate_parent(line_number, line, parent));
                    }
                }
            }

            let parent_index = graph.get_or_insert(parent);
            for &child in children {
                let child_index = graph.get_or_insert(child);
                graph.add_edge(parent_index, child_index);
            }
            num_records += 1;
        }

        debug!(
            records = num_records,
            nodes = graph.num_nodes(),
            edges = graph.num_edges(),
            "parsed edge list"
        );
        Ok(graph)
    }
}

// ============================================================================
// Helpers (private)
// ============================================================================
/// Parses one record into its ids, parent first.
fn parse_record(line: &str, line_number: usize) -> Result<Vec<NodeId>, ParsingError> {
    let record = line.trim();
    if record.is_empty() {
        return Err(ParsingError::empty_line(line_number));
    }

    record
        .split(ID_SEPARATOR)
        .map(|token| parse_node_id(token, line, line_number))
        .collect()
}

/// Parses a single (untrimmed) id token.
fn parse_node_id(token: &str, line: &str, line_number: usize) -> Result<NodeId, ParsingError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParsingError::empty_token(line_number, line));
    }

    token
        .parse::<NodeId>()
        .map_err(|_| ParsingError::invalid_node_id(line_number, line, token))
}
