//! Content region selection.
//!
//! Locates the single subtree that flattening operates on: the content
//! container identified by a fixed structural path, narrowed to a nested
//! form when the page carries one.

use dom_query::{Document, Selection};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::patterns::REGION_FORM_SELECTOR;

/// Resolve the content region of a parsed document.
///
/// The container is looked up with `options.container_selector`. When a
/// `<form>` exists anywhere below the container, the first one in document
/// order becomes the region; otherwise the container itself does.
///
/// Returns `Error::ContainerNotFound` when the container is absent, which
/// usually means the page structure changed or an error/login page came
/// back in place of the authenticated one.
///
/// # Example
///
/// ```rust
/// use rs_pageflat::{dom, selector, Options};
///
/// let doc = dom::parse(
///     r#"<main id="main-content"><div><div><p>text</p></div></div></main>"#,
/// );
/// let region = selector::content_region(&doc, &Options::default())?;
/// assert!(region.exists());
/// # Ok::<(), rs_pageflat::Error>(())
/// ```
pub fn content_region<'a>(doc: &'a Document, options: &Options) -> Result<Selection<'a>> {
    let matches = doc.select(options.container_selector.as_str());
    let Some(container_node) = matches.nodes().first() else {
        return Err(Error::ContainerNotFound(options.container_selector.clone()));
    };
    let container = Selection::from(*container_node);

    let form = container.select_single(REGION_FORM_SELECTOR);
    if form.exists() {
        Ok(form)
    } else {
        Ok(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn page(inner: &str) -> String {
        format!(
            r#"<html><body><main id="main-content"><div><div>{inner}</div></div></main></body></html>"#
        )
    }

    #[test]
    fn region_is_form_when_container_holds_one() {
        let doc = dom::parse(&page("<h1>Title</h1><form><p>inside</p></form>"));
        let region = match content_region(&doc, &Options::default()) {
            Ok(region) => region,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(dom::tag_name(&region), Some("form".to_string()));
    }

    #[test]
    fn region_is_container_without_form() {
        let doc = dom::parse(&page("<p>A</p><p>B</p>"));
        let region = match content_region(&doc, &Options::default()) {
            Ok(region) => region,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(dom::tag_name(&region), Some("div".to_string()));
    }

    #[test]
    fn region_prefers_first_form_in_document_order() {
        let doc = dom::parse(&page(
            "<form><p>FIRST_FORM</p></form><form><p>SECOND_FORM</p></form>",
        ));
        let region = match content_region(&doc, &Options::default()) {
            Ok(region) => region,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert!(dom::text_content(&region).contains("FIRST_FORM"));
        assert!(!dom::text_content(&region).contains("SECOND_FORM"));
    }

    #[test]
    fn missing_container_is_fatal() {
        let doc = dom::parse("<html><body><p>login please</p></body></html>");
        let result = content_region(&doc, &Options::default());
        assert!(matches!(result, Err(Error::ContainerNotFound(_))));
    }

    #[test]
    fn custom_container_selector_is_honored() {
        let doc = dom::parse(r#"<article class="content"><p>text</p></article>"#);
        let options = Options {
            container_selector: "article.content".to_string(),
            ..Options::default()
        };
        let region = match content_region(&doc, &options) {
            Ok(region) => region,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(dom::tag_name(&region), Some("article".to_string()));
    }
}
