//! Decoded Cloud Controller resource shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// Identity block of a resource: where it lives and when it changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Resource identifier.
    #[serde(rename = "guid")]
    pub id: String,
    /// Canonical API path of the resource.
    pub url: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, if the resource was ever updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single API object: metadata paired with an operation specific entity.
///
/// ## Examples
///
/// ```rust
/// use cloudfoundry_client::response::Resource;
/// use cloudfoundry_client::v2::organizations::OrganizationEntity;
///
/// let json = r#"{
///     "metadata": {
///         "guid": "83c4fac5-cd9e-41ee-96df-b4f50fff4aef",
///         "url": "/v2/organizations/83c4fac5-cd9e-41ee-96df-b4f50fff4aef",
///         "created_at": "2015-07-27T22:43:10Z"
///     },
///     "entity": { "name": "name-187" }
/// }"#;
///
/// let resource: Resource<OrganizationEntity> = serde_json::from_str(json).unwrap();
/// assert_eq!(resource.metadata.id, "83c4fac5-cd9e-41ee-96df-b4f50fff4aef");
/// assert_eq!(resource.entity.name.as_deref(), Some("name-187"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource<E> {
    /// Identity and location.
    pub metadata: Metadata,
    /// Content fields.
    pub entity: E,
}

/// One page of a collection.
///
/// Resources keep the order the server returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<R> {
    /// Size of the whole collection.
    pub total_results: u32,
    /// Number of pages in the collection.
    pub total_pages: u32,
    /// Link to the previous page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_url: Option<String>,
    /// Link to the next page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// Resources on this page.
    pub resources: Vec<R>,
}

impl<R> PaginatedResponse<R> {
    /// Checks that the page does not hold more resources than the collection.
    pub(crate) fn check(self) -> Result<Self, DecodeError> {
        let fits = u32::try_from(self.resources.len())
            .map(|len| len <= self.total_results)
            .unwrap_or(false);
        if fits {
            Ok(self)
        } else {
            Err(DecodeError::PageOverflow {
                resources: self.resources.len(),
                total_results: self.total_results,
            })
        }
    }

    /// Returns `true` if the server advertised another page.
    pub fn has_next_page(&self) -> bool {
        self.next_url.is_some()
    }
}
