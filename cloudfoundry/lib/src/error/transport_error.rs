//! Transport-level errors.

use thiserror::Error;

/// No HTTP response could be obtained for a dispatched call.
///
/// These errors are distinct from [`ApiError`](super::ApiError): an
/// `ApiError` means the server answered, a `TransportError` means it never
/// did (or the answer could not be read).
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish a connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The response body could not be read to completion.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// Returns `true` if an outer retry policy could reasonably try again.
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::Body(_) => false,
        }
    }
}
