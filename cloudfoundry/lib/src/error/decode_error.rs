//! Success-body decoding errors.

use thiserror::Error;

/// A success response whose body does not match the expected shape.
///
/// The server claimed success, so this is kept apart from
/// [`ApiError`](super::ApiError).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON parsing or shape mismatch.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,

    /// A page listed more resources than the collection claims to hold.
    #[error("Page holds {resources} resources but total_results is {total_results}")]
    PageOverflow {
        /// Number of resources on the page.
        resources: usize,
        /// Reported size of the whole collection.
        total_results: u32,
    },
}

impl DecodeError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}
