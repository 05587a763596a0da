//! Call descriptor construction errors.

use thiserror::Error;

/// The request builder could not turn a request into a call descriptor.
///
/// A validated request should never produce these; they guard against an
/// operation whose field table disagrees with its endpoint template.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A path parameter required by the template had no value.
    #[error("Missing value for path parameter: {name}")]
    MissingPathParameter {
        /// Placeholder name in the template.
        name: String,
    },

    /// A `{placeholder}` remained in the path after substitution.
    #[error("Unresolved placeholder in path: {path}")]
    UnresolvedPlaceholder {
        /// The path after substitution.
        path: String,
    },

    /// The resolved URL is not valid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body could not be serialized.
    #[error("Failed to serialize request body: {0}")]
    Body(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_parameter() {
        let err = BuildError::MissingPathParameter {
            name: "organization_id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing value for path parameter: organization_id"
        );
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = BuildError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }
}
