//! Authenticated page retrieval.
//!
//! One stateless blocking GET per invocation: construct the request, attach
//! the credential header, send, read the body. No session reuse, no cookie
//! jar, no retries. A non-200 answer is fatal at this boundary so the rest
//! of the pipeline never runs against an error or login page.
//!
//! Credential values are never logged; tracing events carry only the host
//! and path of the target.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use url::Url;

use crate::error::{Error, Result};
use crate::options::Options;

/// Fetch the page body for the given URL.
///
/// The credential string is sent verbatim as the value of
/// `options.credential_header` (by default `Cookie`).
pub fn fetch_page(url: &str, credential: &str, options: &Options) -> Result<Vec<u8>> {
    let url = parse_url(url)?;

    let client = Client::builder()
        .build()
        .map_err(|e| Error::Network(e.to_string()))?;

    let mut request = client
        .get(url.clone())
        .header(options.credential_header.as_str(), credential);
    if let Some(timeout) = options.timeout {
        request = request.timeout(timeout);
    }

    tracing::debug!(
        host_path = %format!("{}{}", url.host_str().unwrap_or("-"), url.path()),
        header = %options.credential_header,
        "page.request.start"
    );

    let response = request.send().map_err(|e| Error::Network(e.to_string()))?;
    let status = response.status();

    if status != StatusCode::OK {
        tracing::warn!(%status, "page.response.error");
        return Err(Error::HttpStatus(status.as_u16()));
    }

    let body = response
        .bytes()
        .map_err(|e| Error::Network(e.to_string()))?;

    tracing::debug!(%status, body_len = body.len(), "page.response.ok");

    Ok(body.to_vec())
}

/// Validate the target URL: must parse and be http or https.
fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::InvalidUrl(format!("{raw}: {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::InvalidUrl(format!(
            "unsupported scheme: {}",
            url.scheme()
        )));
    }
    Ok(url)
}
