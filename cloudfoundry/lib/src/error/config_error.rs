//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while building a client, before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required environment variable is not set.
    #[error("Missing required variable: {name}")]
    MissingVariable {
        /// The variable name.
        name: &'static str,
    },

    /// An environment variable is set but unusable.
    #[error("Invalid value for {name}: {message}")]
    InvalidVariable {
        /// The variable name.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// A default header name or value is invalid.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ConfigError {
    /// Creates a missing variable error.
    pub fn missing_variable(name: &'static str) -> Self {
        Self::MissingVariable { name }
    }

    /// Creates an invalid variable error.
    pub fn invalid_variable(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidVariable {
            name,
            message: message.into(),
        }
    }
}
