//! [`Transport`] implementation over `reqwest`.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use tracing::instrument;

use super::{RawResponse, Transport};
use crate::config::{AuthMethod, ClientConfig};
use crate::error::{ConfigError, TransportError};
use crate::request::CallDescriptor;

/// HTTP transport backed by a pooled `reqwest::Client`.
///
/// Timeout, user agent, default headers and the bearer token come from the
/// [`ClientConfig`] and apply to every call.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    auth: Option<HeaderValue>,
    timeout_ms: u64,
}

impl ReqwestTransport {
    /// Builds a transport from client configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the bearer token is not a valid header value or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .default_headers(config.default_headers().clone())
            .pool_max_idle_per_host(10)
            .build()?;

        let auth = match config.auth() {
            AuthMethod::None => None,
            AuthMethod::BearerToken(token) => {
                let mut value = HeaderValue::try_from(format!("Bearer {token}"))
                    .map_err(|e| ConfigError::InvalidHeader(format!("invalid bearer token: {e}")))?;
                value.set_sensitive(true);
                Some(value)
            }
        };

        Ok(Self {
            client,
            auth,
            timeout_ms: u64::try_from(config.timeout().as_millis()).unwrap_or(u64::MAX),
        })
    }

    fn map_error(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout {
                duration_ms: self.timeout_ms,
            }
        } else if error.is_connect() {
            TransportError::Connection(error.to_string())
        } else {
            TransportError::Request(error)
        }
    }
}

impl Transport for ReqwestTransport {
    #[instrument(
        name = "http_call",
        skip(self, call),
        fields(http.method = %call.method(), http.url = %call.url())
    )]
    async fn execute(&self, call: CallDescriptor) -> Result<RawResponse, TransportError> {
        let (method, url, body) = call.into_parts();
        let mut request = self.client.request(method.to_reqwest(), url);

        if let Some(auth) = &self.auth {
            request = request.header(AUTHORIZATION, auth.clone());
        }

        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| match self.map_error(e) {
                TransportError::Request(e) => TransportError::Body(e.to_string()),
                other => other,
            })?;

        tracing::trace!(status, bytes = body.len(), "response received");
        Ok(RawResponse::new(status, headers, body))
    }
}
