//! Content region flattening.
//!
//! Walks the content region in document order, visits heading, paragraph,
//! and list item elements, and assigns each a stable per-category sequence
//! id. Heading levels h1-h6 collapse into the single category `h`; every
//! other tag is its own category.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use dom_query::Selection;

use crate::dom;
use crate::patterns::WHITESPACE_NORMALIZE;

/// Tags whose text is collected during flattening.
pub static FLATTEN_TAGS: [&str; 8] = ["h1", "h2", "h3", "h4", "h5", "h6", "p", "li"];

/// `FLATTEN_TAGS` as a `HashSet`
pub static FLATTEN_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FLATTEN_TAGS.into_iter().collect());

/// One flattened element: a synthesized id plus its normalized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedElement {
    /// Category name followed by the 1-based occurrence counter, e.g. `p3`.
    pub tag_id: String,

    /// Visible text with whitespace runs collapsed and ends trimmed.
    pub text: String,
}

/// Flatten a content region into id/text pairs in document order.
///
/// Counters start at 1 per category and are never reset mid-traversal, so
/// ids are unique within one result sequence. An element without text still
/// consumes a counter slot. Nested matches (a list item holding a
/// paragraph) are visited independently.
///
/// # Example
///
/// ```rust
/// use rs_pageflat::{dom, extractor};
///
/// let doc = dom::parse("<div><h2>Title</h2><p>Body</p></div>");
/// let region = doc.select("div");
/// let elements = extractor::flatten_region(&region);
///
/// assert_eq!(elements[0].tag_id, "h1");
/// assert_eq!(elements[1].tag_id, "p1");
/// ```
#[must_use]
pub fn flatten_region(region: &Selection) -> Vec<FlattenedElement> {
    let mut counters: HashMap<String, usize> = HashMap::new();
    let mut elements = Vec::new();

    // select("*") yields descendant elements in document order
    for node in region.select("*").nodes() {
        let sel = Selection::from(*node);
        let Some(tag) = dom::tag_name(&sel) else {
            continue;
        };
        let tag = tag.to_ascii_lowercase();
        if !FLATTEN_TAG_SET.contains(tag.as_str()) {
            continue;
        }

        let category = category(&tag);
        let counter = counters.entry(category.to_string()).or_insert(0);
        *counter += 1;

        elements.push(FlattenedElement {
            tag_id: format!("{category}{counter}"),
            text: element_text(&sel),
        });
    }

    elements
}

/// Map a tag name to its counter category.
///
/// All heading levels share the `h` category; other tags keep their name.
fn category(tag: &str) -> &str {
    if tag.starts_with('h') {
        "h"
    } else {
        tag
    }
}

/// Collect the visible text of an element and its descendants.
///
/// Text nodes are joined with single spaces so text split across inline
/// children ("Hello<b>World</b>") keeps a separator, then the whole string
/// is normalized.
fn element_text(sel: &Selection) -> String {
    let Some(root) = sel.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root.descendants() {
        if node.is_text() {
            out.push_str(&node.text());
            out.push(' ');
        }
    }

    normalize_whitespace(&out)
}

/// Collapse whitespace runs to single spaces and trim the ends.
///
/// Idempotent: applying it twice yields the same string as once.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}
