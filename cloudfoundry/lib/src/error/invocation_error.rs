//! Top-level invocation error type.

use super::{ApiError, BuildError, ConfigError, DecodeError, TransportError, ValidationError};
use thiserror::Error;

/// Top-level error type for every client operation.
///
/// Each terminal failure of an invocation surfaces through this single type,
/// while the variants keep the failure kinds distinct so callers can match on
/// the one they care about.
///
/// ## Examples
///
/// ```rust,ignore
/// use cloudfoundry_client::InvocationError;
///
/// fn handle_error(err: InvocationError) {
///     match err {
///         InvocationError::Validation(e) => eprintln!("Fix the request: {e}"),
///         InvocationError::Api(e) if e.is_not_found() => eprintln!("Gone: {e}"),
///         InvocationError::Api(e) => eprintln!("Server said no: {e}"),
///         InvocationError::Transport(e) => eprintln!("Network error: {e}"),
///         InvocationError::Decode(e) => eprintln!("Unexpected body: {e}"),
///         other => eprintln!("{other}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum InvocationError {
    /// Request failed validation; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The call descriptor could not be built from the request.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// No HTTP response could be obtained.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server returned a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success response could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl InvocationError {
    /// Returns the server-side error if this failure came from an error response.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if the failure happened before any network activity.
    pub fn is_pre_dispatch(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Build(_) | Self::Config(_))
    }
}
