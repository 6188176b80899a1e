// Component stub generation from a fetched document

use crate::document::{Node, kind};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Collect a page's immediate component children, in document order.
/// Deliberately one level deep: components nested inside frames belong
/// to those frames, not to the page stub.
pub fn extract_components(page: &Node) -> Vec<&Node> {
    page.children
        .iter()
        .filter(|child| child.is_kind(kind::COMPONENT))
        .collect()
}

/// Render the component stub: one `<div>` per component, in input order.
/// Names are emitted verbatim, unescaped, exactly as the design file
/// spells them.
pub fn render_component_stub(components: &[&Node]) -> String {
    let mut html = String::new();
    for component in components {
        html.push_str(&format!(
            "<div>{}</div>\n",
            component.name.as_deref().unwrap_or("")
        ));
    }
    html
}

pub fn save_stub(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
