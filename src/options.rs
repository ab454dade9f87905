//! Configuration options for the fetch and flattening pipeline.

use std::time::Duration;

use crate::patterns::CONTENT_CONTAINER_SELECTOR;

/// Configuration options for fetching and flattening.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_pageflat::Options;
/// use std::time::Duration;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     timeout: Some(Duration::from_secs(30)),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// CSS path to the content container within the document.
    ///
    /// Default: `main#main-content > div > div`
    pub container_selector: String,

    /// Name of the request header carrying the credential string.
    ///
    /// Default: `Cookie`
    pub credential_header: String,

    /// Total timeout for the page request.
    ///
    /// `None` means no deadline: a hung connection blocks until the
    /// operating system gives up.
    ///
    /// Default: `None`
    pub timeout: Option<Duration>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            container_selector: CONTENT_CONTAINER_SELECTOR.to_string(),
            credential_header: "Cookie".to_string(),
            timeout: None,
        }
    }
}
