//! Response formats: the caller-declared shape of a success body.
//!
//! The shape is chosen from the endpoint's type, never by sniffing the body.

use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use strum::Display;

use super::resource::{PaginatedResponse, Resource};
use crate::error::DecodeError;

/// The decode strategy a format applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ResponseShape {
    /// A single `{ metadata, entity }` envelope.
    Single,
    /// A `{ total_results, total_pages, resources }` page.
    Paginated,
    /// No body is expected.
    Empty,
}

/// Decoding strategy for success bodies.
///
/// ## Examples
///
/// ```rust,ignore
/// use cloudfoundry_client::response::{ResponseFormat, SingleResource};
///
/// type GetOrganization = SingleResource<OrganizationEntity>;
/// let resource = GetOrganization::parse(body)?;
/// ```
pub trait ResponseFormat: Send + Sync {
    /// The decoded value.
    type Output: Send;

    /// The shape this format decodes.
    const SHAPE: ResponseShape;

    /// Decodes a success body.
    fn parse(body: Bytes) -> Result<Self::Output, DecodeError>;
}

/// A single resource with entity type `E`.
#[derive(Debug, Clone, Copy)]
pub struct SingleResource<E>(PhantomData<fn() -> E>);

impl<E: DeserializeOwned + Send> ResponseFormat for SingleResource<E> {
    type Output = Resource<E>;

    const SHAPE: ResponseShape = ResponseShape::Single;

    fn parse(body: Bytes) -> Result<Self::Output, DecodeError> {
        non_empty(&body)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// A page of resources with entity type `E`.
///
/// Decoding is all-or-nothing: one malformed element fails the whole page.
#[derive(Debug, Clone, Copy)]
pub struct PaginatedResources<E>(PhantomData<fn() -> E>);

impl<E: DeserializeOwned + Send> ResponseFormat for PaginatedResources<E> {
    type Output = PaginatedResponse<Resource<E>>;

    const SHAPE: ResponseShape = ResponseShape::Paginated;

    fn parse(body: Bytes) -> Result<Self::Output, DecodeError> {
        non_empty(&body)?;
        let page: PaginatedResponse<Resource<E>> = serde_json::from_slice(&body)?;
        page.check()
    }
}

/// An operation that answers without a body, e.g. `204 No Content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContent;

impl ResponseFormat for NoContent {
    type Output = ();

    const SHAPE: ResponseShape = ResponseShape::Empty;

    fn parse(_body: Bytes) -> Result<Self::Output, DecodeError> {
        Ok(())
    }
}

fn non_empty(body: &Bytes) -> Result<(), DecodeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        Err(DecodeError::EmptyBody)
    } else {
        Ok(())
    }
}
