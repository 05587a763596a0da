//! The concrete HTTP call derived from a request.

use bytes::Bytes;
use url::Url;

use crate::method::RestMethod;

/// Method, resolved URL and optional serialized body of one HTTP call.
///
/// Produced only by [`build`](super::build) from a validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallDescriptor {
    method: RestMethod,
    url: Url,
    body: Option<Bytes>,
}

impl CallDescriptor {
    pub(crate) fn new(method: RestMethod, url: Url, body: Option<Bytes>) -> Self {
        Self { method, url, body }
    }

    /// HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Fully resolved URL, query string included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Serialized JSON body, if the operation carries one.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Splits the descriptor for a transport to consume.
    pub fn into_parts(self) -> (RestMethod, Url, Option<Bytes>) {
        (self.method, self.url, self.body)
    }
}
