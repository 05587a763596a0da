//! Endpoint templates with a type-state builder.
//!
//! An [`Endpoint`] pairs an HTTP method with a path template such as
//! `/v2/organizations/{organization_id}/auditors/{auditor_id}` and, through its
//! type parameter, the [`ResponseFormat`] its success bodies decode with.
//! The [`EndpointBuilder`] tracks required fields in its type so an endpoint
//! cannot be built without an id, method and path.

use std::marker::PhantomData;

use crate::method::RestMethod;
use crate::response::ResponseFormat;

/// Marker types for builder state tracking.
pub mod builder_state {
    /// Marker for a field that has not been set.
    pub struct Missing;
    /// A field that has been set, holding its value.
    pub struct Present<T>(pub(crate) T);
}

use builder_state::{Missing, Present};

/// A Cloud Controller endpoint template.
///
/// ## Type Parameters
///
/// - `F`: The [`ResponseFormat`] used for this endpoint's success bodies.
///
/// ## Examples
///
/// ```rust
/// use cloudfoundry_client::{Endpoint, RestMethod};
/// use cloudfoundry_client::response::SingleResource;
/// use cloudfoundry_client::v2::organizations::OrganizationEntity;
///
/// let endpoint: Endpoint<SingleResource<OrganizationEntity>> = Endpoint::builder()
///     .id("get_organization")
///     .method(RestMethod::Get)
///     .path("/v2/organizations/{id}")
///     .build();
///
/// assert_eq!(endpoint.path_params(), vec!["id"]);
/// ```
#[derive(Debug)]
pub struct Endpoint<F: ResponseFormat> {
    id: String,
    method: RestMethod,
    path: String,
    description: Option<String>,
    _format: PhantomData<F>,
}

// PhantomData<F> is Clone regardless of F
impl<F: ResponseFormat> Clone for Endpoint<F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            method: self.method,
            path: self.path.clone(),
            description: self.description.clone(),
            _format: PhantomData,
        }
    }
}

impl<F: ResponseFormat> Endpoint<F> {
    /// Creates a new endpoint builder.
    pub fn builder() -> EndpointBuilder<Missing, Missing, Missing, F> {
        EndpointBuilder::new()
    }

    /// Returns the endpoint's identifier, used as the operation name in logs.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the HTTP method for this endpoint.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Substitutes `{name}` placeholders with the given values.
    ///
    /// Values are inserted verbatim; encoding is the caller's concern.
    /// Placeholders without a matching pair are left in place.
    pub fn substitute_params(&self, params: &[(&str, &str)]) -> String {
        let mut path = self.path.clone();
        for (key, value) in params {
            path = path.replace(&format!("{{{key}}}"), value);
        }
        path
    }

    /// Extracts placeholder names from the template, in order of appearance.
    pub fn path_params(&self) -> Vec<&str> {
        let mut params = Vec::new();
        let mut rest = self.path.as_str();

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            if close > 0 {
                params.push(&after[..close]);
            }
            rest = &after[close + 1..];
        }

        params
    }
}

/// Type-state builder for [`Endpoint`].
///
/// ## Type Parameters
///
/// - `Id`: State of the id field (`Missing` or `Present`).
/// - `Method`: State of the method field.
/// - `Path`: State of the path field.
/// - `F`: The response format type.
pub struct EndpointBuilder<Id, Method, Path, F: ResponseFormat> {
    id: Id,
    method: Method,
    path: Path,
    description: Option<String>,
    _format: PhantomData<F>,
}

impl<F: ResponseFormat> EndpointBuilder<Missing, Missing, Missing, F> {
    /// Creates a new endpoint builder with no fields set.
    pub fn new() -> Self {
        Self {
            id: Missing,
            method: Missing,
            path: Missing,
            description: None,
            _format: PhantomData,
        }
    }
}

impl<F: ResponseFormat> Default for EndpointBuilder<Missing, Missing, Missing, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, P, F: ResponseFormat> EndpointBuilder<Missing, M, P, F> {
    /// Sets the endpoint id.
    pub fn id(self, id: impl Into<String>) -> EndpointBuilder<Present<String>, M, P, F> {
        EndpointBuilder {
            id: Present(id.into()),
            method: self.method,
            path: self.path,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, P, F: ResponseFormat> EndpointBuilder<I, Missing, P, F> {
    /// Sets the HTTP method.
    pub fn method(self, method: RestMethod) -> EndpointBuilder<I, Present<RestMethod>, P, F> {
        EndpointBuilder {
            id: self.id,
            method: Present(method),
            path: self.path,
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, M, F: ResponseFormat> EndpointBuilder<I, M, Missing, F> {
    /// Sets the path template.
    ///
    /// The path may contain placeholders like `{id}`.
    pub fn path(self, path: impl Into<String>) -> EndpointBuilder<I, M, Present<String>, F> {
        EndpointBuilder {
            id: self.id,
            method: self.method,
            path: Present(path.into()),
            description: self.description,
            _format: PhantomData,
        }
    }
}

impl<I, M, P, F: ResponseFormat> EndpointBuilder<I, M, P, F> {
    /// Sets an optional description.
    pub fn description(self, description: impl Into<String>) -> Self {
        EndpointBuilder {
            description: Some(description.into()),
            ..self
        }
    }
}

impl<F: ResponseFormat> EndpointBuilder<Present<String>, Present<RestMethod>, Present<String>, F> {
    /// Builds the endpoint.
    ///
    /// Only available once id, method and path have all been set.
    pub fn build(self) -> Endpoint<F> {
        Endpoint {
            id: self.id.0,
            method: self.method.0,
            path: self.path.0,
            description: self.description,
            _format: PhantomData,
        }
    }
}
