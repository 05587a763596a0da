//! The invocation facade.
//!
//! [`CloudFoundryClient`] runs one operation end to end: validate, build,
//! dispatch, classify, then decode or map the error. Every invocation
//! reaches exactly one terminal [`Stage`].
//!
//! ## Examples
//!
//! ```rust,ignore
//! use cloudfoundry_client::{ClientConfig, CloudFoundryClient};
//! use cloudfoundry_client::v2::organizations::AssociateAuditorRequest;
//!
//! let client = CloudFoundryClient::new(ClientConfig::from_env()?)?;
//!
//! let request = AssociateAuditorRequest::builder()
//!     .organization_id("83c4fac5-cd9e-41ee-96df-b4f50fff4aef")
//!     .auditor_id("uaa-id-71")
//!     .build();
//!
//! let organization = client.organizations().associate_auditor(request).await?;
//! println!("{}", organization.metadata.url);
//! ```

mod dispatcher;
mod executor;
mod stage;

pub use dispatcher::Dispatcher;
pub use executor::{CloudFoundryClient, OperationOutput};
pub use stage::Stage;
