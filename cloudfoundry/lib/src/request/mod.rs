//! Turning request values into HTTP calls.
//!
//! Each operation's request type implements [`Operation`], which is its field
//! table: which fields fill path placeholders, which become query parameters,
//! and what goes into the body. [`build`] consults that table to produce a
//! [`CallDescriptor`].

mod builder;
mod descriptor;
mod query;

use bytes::Bytes;
use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::response::ResponseFormat;
use crate::validation::Validate;

pub use builder::build;
pub use descriptor::CallDescriptor;
pub use query::{OrderDirection, Pagination, QueryParams};

/// A request for one Cloud Controller operation.
///
/// ## Examples
///
/// ```rust,ignore
/// impl Operation for GetOrganizationRequest {
///     type Format = SingleResource<OrganizationEntity>;
///
///     fn endpoint() -> Endpoint<Self::Format> {
///         Endpoint::builder()
///             .id("get_organization")
///             .method(RestMethod::Get)
///             .path("/v2/organizations/{id}")
///             .build()
///     }
///
///     fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
///         vec![("id", self.id())]
///     }
/// }
/// ```
pub trait Operation: Validate + Send {
    /// How the success body decodes.
    type Format: ResponseFormat;

    /// Method and path template of the operation.
    fn endpoint() -> Endpoint<Self::Format>;

    /// Values for each placeholder in the path template.
    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        Vec::new()
    }

    /// Query parameters, in declaration order.
    fn query(&self) -> QueryParams {
        QueryParams::new()
    }

    /// Serialized request body, if the operation has one.
    ///
    /// ## Errors
    ///
    /// Returns an error if the body cannot be serialized.
    fn body(&self) -> Result<Option<Bytes>, serde_json::Error> {
        Ok(None)
    }
}

/// Serializes `value` as a JSON request body.
///
/// Path-only fields are expected to be marked `#[serde(skip)]`.
///
/// ## Errors
///
/// Returns an error if serialization fails.
pub fn json_body<T: Serialize>(value: &T) -> Result<Option<Bytes>, serde_json::Error> {
    Ok(Some(Bytes::from(serde_json::to_vec(value)?)))
}
