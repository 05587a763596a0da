//! Cloud Controller v2 operations, grouped by resource.
//!
//! Each group exposes its request types, the entity types its responses
//! carry, and an accessor reached from
//! [`CloudFoundryClient`](crate::CloudFoundryClient):
//!
//! | Group | Accessor |
//! |-------|----------|
//! | [`organizations`] | `client.organizations()` |
//! | [`applications`] | `client.applications()` |
//! | [`service_usage_events`] | `client.service_usage_events()` |

pub mod applications;
pub mod organizations;
pub mod service_usage_events;
