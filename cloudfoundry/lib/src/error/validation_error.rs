//! Request validation errors.

use thiserror::Error;

/// A request was rejected before being sent.
///
/// Carries every violation found, in the declaration order of the request's
/// fields, so a caller can fix all of them in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Request is invalid: {}", .messages.join(", "))]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    /// Creates a validation error from the collected violation messages.
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    /// Returns the individual violation messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message_display() {
        let err = ValidationError::new(vec!["id must be specified".to_string()]);
        assert_eq!(err.to_string(), "Request is invalid: id must be specified");
    }

    #[test]
    fn test_messages_joined_in_order() {
        let err = ValidationError::new(vec![
            "id must be specified".to_string(),
            "route id must be specified".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Request is invalid: id must be specified, route id must be specified"
        );
        assert_eq!(err.messages().len(), 2);
    }
}
