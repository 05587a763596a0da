//! Layered error types for the Cloud Foundry client.
//!
//! The error hierarchy mirrors the stages of an invocation:
//! - [`InvocationError`] - Top-level error delivered for any failed invocation
//! - [`ValidationError`] - Request rejected before any network activity
//! - [`BuildError`] - Call descriptor could not be derived from a request
//! - [`TransportError`] - No HTTP response was obtained at all
//! - [`ApiError`] - The server answered with a non-success status
//! - [`DecodeError`] - A success body did not match the expected shape
//! - [`ConfigError`] - Client configuration problems

mod api_error;
mod build_error;
mod config_error;
mod decode_error;
mod invocation_error;
mod transport_error;
mod validation_error;

pub use api_error::ApiError;
pub(crate) use api_error::FALLBACK_ERROR_CODE;
pub use build_error::BuildError;
pub use config_error::ConfigError;
pub use decode_error::DecodeError;
pub use invocation_error::InvocationError;
pub use transport_error::TransportError;
pub use validation_error::ValidationError;
