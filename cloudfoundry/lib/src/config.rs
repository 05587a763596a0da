//! Client configuration.
//!
//! A [`ClientConfig`] is assembled with [`ClientConfig::builder`] or read from
//! the environment with [`ClientConfig::from_env`]:
//!
//! | variable | meaning |
//! |---|---|
//! | `CF_API_URL` | Cloud Controller root, e.g. `https://api.example.com` (required) |
//! | `CF_ACCESS_TOKEN` | bearer token sent with every request (optional) |
//! | `CF_TIMEOUT_SECS` | request timeout in whole seconds (optional) |

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::error::ConfigError;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API root URL.
pub const API_URL_VAR: &str = "CF_API_URL";
/// Environment variable holding the bearer token.
pub const ACCESS_TOKEN_VAR: &str = "CF_ACCESS_TOKEN";
/// Environment variable holding the timeout in seconds.
pub const TIMEOUT_VAR: &str = "CF_TIMEOUT_SECS";

const DEFAULT_USER_AGENT: &str = concat!("cloudfoundry-client/", env!("CARGO_PKG_VERSION"));

/// How requests authenticate.
///
/// Tokens are obtained elsewhere; the client only attaches them.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthMethod {
    /// No `Authorization` header.
    #[default]
    None,
    /// `Authorization: Bearer <token>`.
    BearerToken(String),
}

impl fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::BearerToken(_) => f.write_str("BearerToken(<redacted>)"),
        }
    }
}

/// Settings shared by every request a client makes.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: AuthMethod,
    user_agent: String,
}

impl ClientConfig {
    /// Creates a builder for the given API root.
    pub fn builder(base_url: Url) -> ClientConfigBuilder {
        ClientConfigBuilder::new(base_url)
    }

    /// Reads the configuration from process environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error if `CF_API_URL` is missing or any variable is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use cloudfoundry_client::ClientConfig;
    ///
    /// let config = ClientConfig::from_lookup(|name| match name {
    ///     "CF_API_URL" => Some("https://api.example.com".to_string()),
    ///     "CF_TIMEOUT_SECS" => Some("5".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.timeout().as_secs(), 5);
    /// ```
    ///
    /// ## Errors
    ///
    /// Returns an error if `CF_API_URL` is missing or any variable is malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(API_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::missing_variable(API_URL_VAR))?;
        let base_url = Url::parse(base_url.trim())?;

        let mut builder = Self::builder(base_url);

        if let Some(token) = lookup(ACCESS_TOKEN_VAR).filter(|v| !v.trim().is_empty()) {
            let token = token.trim();
            let token = token
                .strip_prefix("bearer ")
                .or_else(|| token.strip_prefix("Bearer "))
                .unwrap_or(token);
            builder = builder.auth(AuthMethod::BearerToken(token.to_string()));
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid_variable(TIMEOUT_VAR, format!("{e}")))?;
            if secs == 0 {
                return Err(ConfigError::invalid_variable(TIMEOUT_VAR, "must be positive"));
            }
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build())
    }

    /// API root URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Headers added to every request.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Authentication applied to every request.
    pub fn auth(&self) -> &AuthMethod {
        &self.auth
    }

    /// `User-Agent` sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug)]
pub struct ClientConfigBuilder {
    base_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: AuthMethod,
    user_agent: String,
}

impl ClientConfigBuilder {
    fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: AuthMethod::None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ConfigError> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| ConfigError::InvalidHeader(format!("invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::InvalidHeader(format!("invalid header value: {e}")))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the authentication method.
    pub fn auth(mut self, auth: AuthMethod) -> Self {
        self.auth = auth;
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url,
            timeout: self.timeout,
            default_headers: self.default_headers,
            auth: self.auth,
            user_agent: self.user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_builder_defaults() {
        let config = ClientConfig::builder(Url::parse("https://api.example.com").unwrap()).build();
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.auth(), &AuthMethod::None);
        assert!(config.default_headers().is_empty());
        assert!(config.user_agent().starts_with("cloudfoundry-client/"));
    }

    #[test]
    fn test_default_header_rejects_invalid_name() {
        let result = ClientConfig::builder(Url::parse("https://api.example.com").unwrap())
            .default_header("bad header", "value");
        assert!(matches!(result, Err(ConfigError::InvalidHeader(_))));
    }

    #[test]
    fn test_from_lookup_minimal() {
        let config =
            ClientConfig::from_lookup(lookup(&[("CF_API_URL", "https://api.example.com")]))
                .unwrap();
        assert_eq!(config.base_url().as_str(), "https://api.example.com/");
        assert_eq!(config.auth(), &AuthMethod::None);
    }

    #[test]
    fn test_from_lookup_full() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CF_API_URL", " https://api.example.com "),
            ("CF_ACCESS_TOKEN", "bearer abc.def"),
            ("CF_TIMEOUT_SECS", "12"),
        ]))
        .unwrap();
        assert_eq!(config.auth(), &AuthMethod::BearerToken("abc.def".to_string()));
        assert_eq!(config.timeout(), Duration::from_secs(12));
    }

    #[test]
    fn test_from_lookup_missing_url() {
        let result = ClientConfig::from_lookup(lookup(&[("CF_ACCESS_TOKEN", "abc")]));
        assert!(matches!(
            result,
            Err(ConfigError::MissingVariable { name: "CF_API_URL" })
        ));
    }

    #[test]
    fn test_from_lookup_invalid_url() {
        let result = ClientConfig::from_lookup(lookup(&[("CF_API_URL", "not a url")]));
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_from_lookup_invalid_timeout() {
        for raw in ["soon", "0", "-3"] {
            let result = ClientConfig::from_lookup(lookup(&[
                ("CF_API_URL", "https://api.example.com"),
                ("CF_TIMEOUT_SECS", raw),
            ]));
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidVariable {
                        name: "CF_TIMEOUT_SECS",
                        ..
                    })
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_auth_debug_redacts_token() {
        let auth = AuthMethod::BearerToken("secret".to_string());
        assert_eq!(format!("{auth:?}"), "BearerToken(<redacted>)");
    }
}
