use crate::document::Node;
use crate::walk::walk;
use colored::Colorize;

/// Attributes shown per node. Everything else the API returns is noise
/// at summary granularity.
const SUMMARY_KEYS: &[&str] = &["name"];

/// Format a single node as `<indent><kind> (<key>=<value> ...)`, with
/// two spaces of indentation per level of depth and JSON-quoted values.
pub fn format_node_line(node: &Node, depth: usize) -> String {
    let mut fragments = Vec::new();
    for key in SUMMARY_KEYS {
        if let Some(value) = attribute_value(node, key) {
            fragments.push(format!("{}={}", key.cyan(), value));
        }
    }
    format!(
        "{}{} ({})",
        "  ".repeat(depth),
        node.kind.green(),
        fragments.join(" ")
    )
}

fn attribute_value(node: &Node, key: &str) -> Option<String> {
    match key {
        "name" => node
            .name
            .as_deref()
            .and_then(|name| serde_json::to_string(name).ok()),
        other => node.extra.get(other).map(|value| value.to_string()),
    }
}

/// Render the whole tree, one line per node.
pub fn render_summary(root: &Node) -> String {
    let mut out = String::new();
    walk(root, &mut |node, depth, _index| {
        out.push_str(&format_node_line(node, depth));
        out.push('\n');
    });
    out
}
