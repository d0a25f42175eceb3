//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// HTTP error response surfaced via [`crate::Response::error_for_status`].
    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    /// Failed to decode the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
