//! Mapping of failure bodies onto [`ApiError`].

use serde::Deserialize;

use crate::error::{ApiError, FALLBACK_ERROR_CODE};

/// Description used when the status has no canonical reason phrase.
const GENERIC_DESCRIPTION: &str = "Unknown Error";

/// The Cloud Controller's standard error body. Every field is required.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    code: i64,
    description: String,
    error_code: String,
}

/// Turns a failure response into an [`ApiError`].
///
/// A well-formed error envelope is returned verbatim. Anything else (an empty
/// body, non-JSON, or an envelope missing a field) yields a fallback error
/// whose code is the HTTP status. This function never fails.
pub fn map_error(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => ApiError::new(
            status,
            envelope.code,
            envelope.description,
            envelope.error_code,
        ),
        Err(e) => {
            tracing::debug!(
                status,
                error = %e,
                "error body is not a Cloud Controller error envelope"
            );
            fallback(status)
        }
    }
}

fn fallback(status: u16) -> ApiError {
    let description = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or(GENERIC_DESCRIPTION);
    ApiError::new(status, i64::from(status), description, FALLBACK_ERROR_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_envelope_verbatim() {
        let body = br#"{
            "code": 30003,
            "description": "The organization could not be found: 83c4fac5",
            "error_code": "CF-OrganizationNotFound"
        }"#;
        let err = map_error(404, body);
        assert_eq!(err.status(), 404);
        assert_eq!(err.code(), 30003);
        assert_eq!(err.description(), "The organization could not be found: 83c4fac5");
        assert_eq!(err.error_code(), "CF-OrganizationNotFound");
        assert!(!err.is_fallback());
    }

    #[test]
    fn test_envelope_with_extra_fields() {
        let body = br#"{ "code": 1000, "description": "Invalid Auth Token", "error_code": "CF-InvalidAuthToken", "http": {} }"#;
        let err = map_error(401, body);
        assert_eq!(err.code(), 1000);
        assert_eq!(err.error_code(), "CF-InvalidAuthToken");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = map_error(500, b"<html>oops</html>");
        assert_eq!(err.code(), 500);
        assert_eq!(err.description(), "Internal Server Error");
        assert!(err.is_fallback());
    }

    #[test]
    fn test_empty_body_falls_back() {
        let err = map_error(502, b"");
        assert_eq!(err.code(), 502);
        assert_eq!(err.description(), "Bad Gateway");
    }

    #[test]
    fn test_partial_envelope_falls_back() {
        let body = br#"{ "code": 30003, "description": "missing the identifier" }"#;
        let err = map_error(404, body);
        assert_eq!(err.code(), 404);
        assert!(err.is_fallback());
    }

    #[test]
    fn test_unknown_status_uses_generic_description() {
        let err = map_error(599, b"");
        assert_eq!(err.code(), 599);
        assert_eq!(err.description(), "Unknown Error");
    }
}
