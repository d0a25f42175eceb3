//! Platform error type.

/// Error type for workload operations.
#[derive(Debug, thiserror::Error)]
pub enum WorkloadError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),

    #[error("Fetch error: {0}")]
    FetchError(#[from] anyhow::Error),
}
