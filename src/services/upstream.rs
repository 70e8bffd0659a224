//! Upstream fetch: retrieves the remote document on the viewer's behalf.
//!
//! DESIGN
//! ======
//! The relay exists so the browser never talks to the document host directly.
//! One GET per request, no retries, no caching. Upstream failures are logged
//! with their detail and collapsed into a generic [`RelayError`] so nothing
//! about the upstream leaks to the caller.

use std::time::Duration;

use crate::config::RelayConfig;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while relaying a document.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The `url` query parameter is absent or empty.
    #[error("missing url parameter")]
    MissingParameter,

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The upstream request could not be sent or completed.
    #[error("upstream request failed: {0}")]
    UpstreamRequest(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CLIENT
// =============================================================================

/// Build the shared upstream HTTP client from config.
///
/// # Errors
///
/// Returns [`RelayError::HttpClientBuild`] if the TLS backend fails to initialize.
pub fn build_client(config: &RelayConfig) -> Result<reqwest::Client, RelayError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeouts.request_secs))
        .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| RelayError::HttpClientBuild(e.to_string()))
}

/// GET `url` and return the upstream response once its status is known to be
/// a success. The body is left unread so the caller can stream it.
///
/// A content type other than PDF is logged and tolerated.
///
/// # Errors
///
/// [`RelayError::UpstreamRequest`] for unparsable URLs and transport
/// failures, [`RelayError::UpstreamStatus`] for non-2xx answers.
pub async fn fetch_document(http: &reqwest::Client, url: &str) -> Result<reqwest::Response, RelayError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| RelayError::UpstreamRequest(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(RelayError::UpstreamStatus { status: status.as_u16() });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !is_pdf_content_type(content_type) {
        tracing::warn!(%url, content_type, "upstream content type is not PDF; relaying anyway");
    }

    Ok(response)
}

/// Whether a `Content-Type` header value names PDF, ignoring case and parameters.
#[must_use]
pub fn is_pdf_content_type(value: &str) -> bool {
    value.to_ascii_lowercase().contains(PDF_CONTENT_TYPE)
}

#[cfg(test)]
#[path = "upstream_test.rs"]
mod tests;
