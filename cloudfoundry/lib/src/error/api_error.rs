//! Errors reported by the Cloud Controller itself.

use thiserror::Error;

/// Error code used when the server's error body could not be understood.
pub(crate) const FALLBACK_ERROR_CODE: &str = "CF-UnknownError";

/// A typed failure response from the Cloud Controller.
///
/// Decoded from the standard error envelope
/// `{ "code": int, "description": string, "error_code": string }`. When the
/// envelope is missing or incomplete, the error mapper builds a fallback value
/// whose `code` is the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error_code}({code}): {description}")]
pub struct ApiError {
    status: u16,
    code: i64,
    description: String,
    error_code: String,
}

impl ApiError {
    /// Creates an API error from its parts.
    pub fn new(
        status: u16,
        code: i64,
        description: impl Into<String>,
        error_code: impl Into<String>,
    ) -> Self {
        Self {
            status,
            code,
            description: description.into(),
            error_code: error_code.into(),
        }
    }

    /// HTTP status of the failed response.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Numeric Cloud Controller error code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Human readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Machine readable error identifier, e.g. `CF-OrganizationNotFound`.
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Returns `true` if the server reported a missing resource.
    pub fn is_not_found(&self) -> bool {
        self.status == 404 || self.error_code.ends_with("NotFound")
    }

    /// Returns `true` if this error was synthesized because the server's
    /// error body was unusable.
    pub fn is_fallback(&self) -> bool {
        self.error_code == FALLBACK_ERROR_CODE
    }
}
