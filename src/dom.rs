//! DOM Operations Adapter
//!
//! Thin wrappers over the `dom_query` crate so the rest of the pipeline
//! reads in terms of document operations rather than library calls.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get all text content of node and descendants, as the parser stored it.
///
/// No whitespace normalization is applied here.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> String {
    sel.text().to_string()
}
