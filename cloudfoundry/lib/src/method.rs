//! HTTP methods used by Cloud Controller operations.

use strum::{Display, EnumString};

/// HTTP methods for Cloud Controller endpoints.
///
/// ## Examples
///
/// ```rust
/// use cloudfoundry_client::RestMethod;
///
/// assert_eq!(RestMethod::Put.to_string(), "PUT");
///
/// let parsed: RestMethod = "GET".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Get);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource or collection.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Update a resource or create an association.
    Put,
    /// HTTP DELETE - Remove a resource or association.
    Delete,
}

impl RestMethod {
    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Put.to_string(), "PUT");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("POST".parse::<RestMethod>().unwrap(), RestMethod::Post);
        assert!("PATCH".parse::<RestMethod>().is_err());
        assert!("FETCH".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_converts_to_reqwest() {
        assert_eq!(reqwest::Method::from(RestMethod::Get), reqwest::Method::GET);
        assert_eq!(reqwest::Method::from(RestMethod::Post), reqwest::Method::POST);
        assert_eq!(reqwest::Method::from(RestMethod::Put), reqwest::Method::PUT);
        assert_eq!(RestMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
    }
}
