//! Response handling.
//!
//! A raw response is first routed by [`classify`] on its status alone. Success
//! bodies are decoded by the endpoint's [`ResponseFormat`] into a
//! [`Resource`] or a [`PaginatedResponse`]; failure bodies go to
//! [`map_error`], which always yields an [`ApiError`](crate::error::ApiError).

mod classify;
mod error_mapper;
mod format;
mod resource;

pub use classify::{Classification, classify};
pub use error_mapper::map_error;
pub use format::{NoContent, PaginatedResources, ResponseFormat, ResponseShape, SingleResource};
pub use resource::{Metadata, PaginatedResponse, Resource};
