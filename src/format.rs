//! Output rendering.

use crate::extractor::FlattenedElement;

/// Render flattened elements as newline-joined `id=text` lines.
///
/// No trailing newline is added; the caller's print step supplies one.
#[must_use]
pub fn render(elements: &[FlattenedElement]) -> String {
    elements
        .iter()
        .map(|element| format!("{}={}", element.tag_id, element.text))
        .collect::<Vec<_>>()
        .join("\n")
}
