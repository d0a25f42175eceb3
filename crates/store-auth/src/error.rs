//! Auth error types.

use thiserror::Error;

/// Errors that can occur when resolving credentials.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No credential was present where one was expected.
    #[error("Missing credential: {0}")]
    MissingToken(String),
}
