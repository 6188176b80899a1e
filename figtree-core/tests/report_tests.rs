// Tests for component extraction and stub generation

use figtree_core::document::Node;
use figtree_core::report::{extract_components, render_component_stub, save_stub};
use serde_json::Map;
use tempfile::TempDir;

fn node(kind: &str, name: Option<&str>, children: Vec<Node>) -> Node {
    Node {
        kind: kind.to_string(),
        name: name.map(str::to_string),
        children,
        extra: Map::new(),
    }
}

// ============================================================================
// Component Extraction Tests
// ============================================================================

#[test]
fn test_extract_components_filters_and_preserves_order() {
    let page = node(
        "CANVAS",
        Some("Page 1"),
        vec![
            node("FRAME", Some("Header"), vec![]),
            node("COMPONENT", Some("A"), vec![]),
            node("COMPONENT", Some("B"), vec![]),
        ],
    );

    let components = extract_components(&page);

    assert_eq!(components.len(), 2);
    assert_eq!(components[0].name.as_deref(), Some("A"));
    assert_eq!(components[1].name.as_deref(), Some("B"));
}

#[test]
fn test_extract_components_is_one_level_only() {
    // A component nested inside a frame is not a page-level component.
    let page = node(
        "CANVAS",
        Some("Page 1"),
        vec![node(
            "FRAME",
            Some("Header"),
            vec![node("COMPONENT", Some("Nested"), vec![])],
        )],
    );

    let components = extract_components(&page);

    assert!(components.is_empty());
}

#[test]
fn test_extract_components_empty_page() {
    let page = node("CANVAS", Some("Page 1"), vec![]);

    assert!(extract_components(&page).is_empty());
}

// ============================================================================
// Stub Rendering Tests
// ============================================================================

#[test]
fn test_render_component_stub_exact_output() {
    let button = node("COMPONENT", Some("Button"), vec![]);
    let card = node("COMPONENT", Some("Card"), vec![]);

    let stub = render_component_stub(&[&button, &card]);

    assert_eq!(stub, "<div>Button</div>\n<div>Card</div>\n");
}

#[test]
fn test_render_component_stub_empty_input() {
    assert_eq!(render_component_stub(&[]), "");
}

#[test]
fn test_render_component_stub_unnamed_component() {
    let anonymous = node("COMPONENT", None, vec![]);

    assert_eq!(render_component_stub(&[&anonymous]), "<div></div>\n");
}

#[test]
fn test_render_component_stub_does_not_escape_names() {
    let spiky = node("COMPONENT", Some("A<b> & friends"), vec![]);

    assert_eq!(
        render_component_stub(&[&spiky]),
        "<div>A<b> & friends</div>\n"
    );
}

// ============================================================================
// Stub Save Tests
// ============================================================================

#[test]
fn test_save_stub_writes_verbatim() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ui.js");

    save_stub("<div>Button</div>\n", &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<div>Button</div>\n");
}

#[test]
fn test_save_stub_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ui.js");

    save_stub("<div>Old</div>\n", &path).unwrap();
    save_stub("<div>New</div>\n", &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<div>New</div>\n");
}
