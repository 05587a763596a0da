//! The HTTP transport capability consumed by the client.
//!
//! The pipeline only needs one thing from HTTP: turn a
//! [`CallDescriptor`](crate::request::CallDescriptor) into a
//! [`RawResponse`], or report that no response could be obtained.
//! [`ReqwestTransport`] is the default implementation; tests and callers
//! with their own HTTP stack can supply another.

mod http;

use std::future::Future;

use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::error::TransportError;
use crate::request::CallDescriptor;

pub use http::ReqwestTransport;

/// Executes HTTP calls.
///
/// Implementations must be safe to share across concurrent invocations.
/// Dropping the returned future before it completes must abandon the call
/// and release whatever it held.
pub trait Transport: Send + Sync {
    /// Sends the call and waits for a complete response.
    fn execute(
        &self,
        call: CallDescriptor,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    fn execute(
        &self,
        call: CallDescriptor,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send {
        (**self).execute(call)
    }
}

/// A complete HTTP response, body fully buffered.
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    /// Creates a response from its parts.
    pub fn new(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Response body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consumes the response, returning the body.
    pub fn into_body(self) -> Bytes {
        self.body
    }
}
