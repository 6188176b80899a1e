use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Well-known node kinds. The tag set is open: the API introduces new
/// kinds without notice, so anything not listed here is passed through
/// untouched rather than rejected.
pub mod kind {
    pub const DOCUMENT: &str = "DOCUMENT";
    pub const CANVAS: &str = "CANVAS";
    pub const COMPONENT: &str = "COMPONENT";
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Response has no document field")]
    MissingDocument,

    #[error("Document has no pages")]
    MissingPage,

    #[error("Malformed node tree: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// One element of a design file's node tree. Built once per run from the
/// fetched response and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Every other attribute the API returned for this node.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }
}

/// Pull the document root out of a raw file response.
pub fn document_root(data: &Value) -> Result<Node, DocumentError> {
    let doc = data.get("document").ok_or(DocumentError::MissingDocument)?;
    Ok(serde_json::from_value(doc.clone())?)
}

/// The first canvas of a document. The stub generator only ever looks at
/// page one.
pub fn first_page(document: &Node) -> Result<&Node, DocumentError> {
    document.children.first().ok_or(DocumentError::MissingPage)
}
