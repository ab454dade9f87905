//! Error types for rs-pageflat.
//!
//! This module defines the error types returned by the fetch and
//! flattening pipeline.

/// Error type for fetch and flattening operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required environment variable is not set.
    #[error("missing required environment variable: {0}")]
    MissingCredential(String),

    /// The target URL could not be parsed or uses an unsupported scheme.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with something other than 200 OK.
    #[error("failed to retrieve the page, status code: {0}")]
    HttpStatus(u16),

    /// The expected content container is absent from the document.
    #[error("content container not found: {0}")]
    ContainerNotFound(String),
}

/// Result type alias for fetch and flattening operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_message_carries_the_code() {
        let err = Error::HttpStatus(403);
        assert_eq!(
            err.to_string(),
            "failed to retrieve the page, status code: 403"
        );
    }

    #[test]
    fn container_message_names_the_selector() {
        let err = Error::ContainerNotFound("main > div".to_string());
        assert!(err.to_string().contains("main > div"));
    }
}
