//! Routing of raw responses by status.

use bytes::Bytes;

use super::format::ResponseShape;
use crate::transport::RawResponse;

/// Where a raw response goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Status in `200..=299`; the body goes to the decoder.
    Success {
        /// Raw success body.
        body: Bytes,
        /// Shape the caller expects.
        shape: ResponseShape,
    },
    /// Any other status; the body goes to the error mapper.
    Failure {
        /// HTTP status.
        status: u16,
        /// Raw error body.
        body: Bytes,
    },
}

/// Routes a response on its status alone. The body is never inspected.
pub fn classify(response: RawResponse, shape: ResponseShape) -> Classification {
    let status = response.status();
    if (200..=299).contains(&status) {
        Classification::Success {
            body: response.into_body(),
            shape,
        }
    } else {
        Classification::Failure {
            status,
            body: response.into_body(),
        }
    }
}
