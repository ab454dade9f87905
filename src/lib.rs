//! # rs-pageflat
//!
//! Fetches an authenticated web page and flattens the text of its content
//! region into tag-indexed lines.
//!
//! The pipeline is a single pass: fetch, transcode to UTF-8, parse, resolve
//! the content region (a form nested in the page's main content container,
//! or the container itself), then walk that region in document order
//! collecting heading, paragraph, and list item text. Each collected element
//! gets a synthesized id: its category (`h` for any heading level, otherwise
//! the tag name) plus a 1-based per-category occurrence counter.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_pageflat::{flatten, Options};
//!
//! let html = r#"<main id="main-content"><div><div>
//! <form><h2>Your answers</h2><p>Check them   carefully.</p></form>
//! </div></div></main>"#;
//!
//! let listing = flatten(html, &Options::default())?;
//! assert_eq!(listing, "h1=Your answers\np1=Check them carefully.");
//! # Ok::<(), rs_pageflat::Error>(())
//! ```
//!
//! Network retrieval lives in [`fetch`]; everything below it operates on
//! HTML already in memory, so extraction is testable without a server.

mod error;
mod format;
mod options;
mod patterns;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Content region flattening (interest tags, counters, text normalization).
pub mod extractor;

/// Authenticated page retrieval.
pub mod fetch;

/// Content region selection.
pub mod selector;

// Public API - re-exports
pub use error::{Error, Result};
pub use extractor::FlattenedElement;
pub use fetch::fetch_page;
pub use options::Options;

/// Flatten the content region of an HTML document into `id=text` lines.
///
/// Lines are joined with a single newline and carry no trailing newline.
///
/// Returns `Error::ContainerNotFound` when the document lacks the expected
/// content container.
pub fn flatten(html: &str, options: &Options) -> Result<String> {
    let doc = dom::parse(html);
    let region = selector::content_region(&doc, options)?;
    let elements = extractor::flatten_region(&region);
    Ok(format::render(&elements))
}

/// Flatten raw HTML bytes, detecting the character encoding first.
///
/// Charset declarations in meta tags are honored; bytes that cannot be
/// decoded are replaced rather than rejected.
pub fn flatten_bytes(html: &[u8], options: &Options) -> Result<String> {
    let html_str = encoding::transcode_to_utf8(html);
    flatten(&html_str, options)
}
