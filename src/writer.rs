//! Writing parsed structures back out as text.
//!
//! * [to_edge_list] renders a [Graph] in the edge-list input format
//! * [render_tree] draws a [RootedTree] as an indented outline for display

use crate::model::{Graph, RootedTree, VertexIndex};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Converts a graph into edge-list text.
///
/// Emits one record per node that has children, in the order nodes were
/// first seen. A node that is neither a parent nor a child (a lone root)
/// gets a record of its own so that it survives a round trip. Parsing the
/// output again yields a graph with the same nodes and children.
///
/// # Example
/// ```
/// use treekind::{parse_str, writer::to_edge_list};
///
/// let graph = parse_str(" 1, 2, 3\n2,4\n").unwrap();
/// assert_eq!(to_edge_list(&graph), "1,2,3\n2,4");
/// ```
pub fn to_edge_list(graph: &Graph) -> String {
    let is_child = graph.child_flags();

    let records: Vec<String> = graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|(index, node)| !node.is_leaf() || !is_child[*index])
        .map(|(_, node)| {
            let mut record = node.id().to_string();
            for &child in node.children() {
                record.push(',');
                record.push_str(&graph[child].id().to_string());
            }
            record
        })
        .collect();

    records.join("\n")
}

/// Writes a graph as edge-list text to a file.
///
/// # Errors
/// Returns an [std::io::Error] if the file cannot be created or written.
pub fn write_edge_list_file<P: AsRef<Path>>(path: P, graph: &Graph) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", to_edge_list(graph))?;
    writer.flush()
}

/// Draws a tree as an indented outline.
///
/// # Example Output
/// ```text
/// Tree with 5 nodes (height 2):
/// [1]
///   ├─ [2]
///   │  ├─ [4]
///   │  └─ [5]
///   └─ [3]
/// ```
pub fn render_tree(tree: &RootedTree) -> String {
    let graph = tree.graph();
    let mut out = format!(
        "Tree with {} nodes (height {}):\n",
        tree.num_nodes(),
        tree.height()
    );

    // (index, prefix, is_last, is_root); explicit stack keeps deep chains safe
    let mut stack: Vec<(VertexIndex, String, bool, bool)> =
        vec![(tree.root_index(), String::new(), true, true)];

    while let Some((index, prefix, is_last, is_root)) = stack.pop() {
        let node = &graph[index];
        let connector = if is_root {
            ""
        } else if is_last {
            "└─ "
        } else {
            "├─ "
        };
        out.push_str(&format!("{prefix}{connector}[{}]\n", node.id()));

        let child_prefix = if is_root {
            "  ".to_string()
        } else {
            format!("{prefix}{}  ", if is_last { " " } else { "│" })
        };

        let num_children = node.num_children();
        for (position, &child) in node.children().iter().enumerate().rev() {
            stack.push((child, child_prefix.clone(), position + 1 == num_children, false));
        }
    }

    out
}
