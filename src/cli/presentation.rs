//! CLI presentation: text and json formatters for trees and nodes.

use crate::error::AppError;
use crate::tree::FsNode;

/// One-line description of a node
pub fn format_node_text(node: &FsNode) -> String {
    match node {
        FsNode::File(f) => format!("{} [file, {} bytes] {}", node.name(), f.size(), node.hash()),
        FsNode::Symbolic(s) => format!("{} -> {} [symbolic] {}", node.name(), s.link(), node.hash()),
        FsNode::Directory(d) => format!(
            "{} [directory, {} entries] {}",
            node.name(),
            d.entries().len(),
            node.hash()
        ),
    }
}

/// Whole tree drawn with box characters, followed by a summary line
pub fn format_tree_text(root: &FsNode) -> String {
    let mut lines = vec![format_node_text(root)];
    push_entries(root, "", &mut lines);

    let stats = root.stats();
    lines.push(String::new());
    lines.push(format!(
        "{} directories, {} files, {} symlinks, {} bytes",
        stats.directories, stats.files, stats.symlinks, stats.total_size
    ));
    lines.join("\n")
}

fn push_entries(node: &FsNode, prefix: &str, lines: &mut Vec<String>) {
    let entries = node.entries();
    for (i, entry) in entries.iter().enumerate() {
        let last = i + 1 == entries.len();
        let (branch, indent) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        lines.push(format!("{}{}{}", prefix, branch, format_node_text(entry)));
        push_entries(entry, &format!("{}{}", prefix, indent), lines);
    }
}

pub fn format_node_json(node: &FsNode, pretty: bool) -> Result<String, AppError> {
    Ok(node.to_json(pretty)?)
}
