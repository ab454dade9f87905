//! Compiled regex patterns and CSS selectors used across the pipeline.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches runs of whitespace (spaces, tabs, newlines) for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

// =============================================================================
// CSS Selectors
// =============================================================================

/// Structural path to the wrapper element holding a page's primary content.
///
/// GOV.UK prototype-kit pages place it two divs below the main landmark.
pub const CONTENT_CONTAINER_SELECTOR: &str = "main#main-content > div > div";

/// Selector for the form nested inside the content container, if any.
pub const REGION_FORM_SELECTOR: &str = "form";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_normalize_collapses_runs() {
        let result = WHITESPACE_NORMALIZE.replace_all("hello \t\n  world", " ");
        assert_eq!(result, "hello world");
    }
}
