//! Typed client for the Cloud Foundry Cloud Controller v2 API.
//!
//! Every operation is a request value that knows its endpoint. Invoking it
//! runs a fixed pipeline: validate, build the HTTP call, dispatch it, then
//! decode the success body or map the error body. Each invocation ends in
//! exactly one decoded value or one [`InvocationError`].
//!
//! ## Features
//!
//! - **Typed requests**: immutable request values with builders and
//!   validation that reports every missing field at once
//! - **Declared response shapes**: single resources, paginated lists and
//!   empty bodies, chosen per operation
//! - **Structured API errors**: `code`, `description` and `error_code` from
//!   the Cloud Controller error envelope, with a fallback for bodies that
//!   are not one
//! - **Pluggable transport**: `reqwest` by default, any [`Transport`] in tests
//!
//! ## Example
//!
//! ```rust,ignore
//! use cloudfoundry_client::{ClientConfig, CloudFoundryClient};
//! use cloudfoundry_client::v2::organizations::ListOrganizationsRequest;
//!
//! let client = CloudFoundryClient::new(ClientConfig::from_env()?)?;
//!
//! let page = client
//!     .organizations()
//!     .list(ListOrganizationsRequest::builder().name("test-name").build())
//!     .await?;
//!
//! for organization in page.resources {
//!     println!("{:?}", organization.entity.name);
//! }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod request;
pub mod response;
pub mod transport;
pub mod v2;
pub mod validation;

// Re-exports for convenience
pub use client::{CloudFoundryClient, Dispatcher, OperationOutput, Stage};
pub use config::{AuthMethod, ClientConfig, ClientConfigBuilder};
pub use endpoint::{Endpoint, EndpointBuilder};
pub use error::{
    ApiError, BuildError, ConfigError, DecodeError, InvocationError, TransportError,
    ValidationError,
};
pub use method::RestMethod;
pub use request::{CallDescriptor, Operation, OrderDirection, Pagination, QueryParams};
pub use response::{
    Metadata, NoContent, PaginatedResources, PaginatedResponse, Resource, ResponseFormat,
    SingleResource,
};
pub use transport::{RawResponse, ReqwestTransport, Transport};
pub use validation::{Validate, ValidationResult};
