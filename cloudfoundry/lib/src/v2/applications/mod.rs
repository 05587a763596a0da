//! Application operations.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | `associate_route` | PUT | `/v2/apps/{id}/routes/{route_id}` |
//! | `copy` | POST | `/v2/apps/{id}/copy_bits` |

mod types;

pub use types::{
    ApplicationEntity, AssociateApplicationRouteRequest, AssociateApplicationRouteRequestBuilder,
    CopyApplicationRequest, CopyApplicationRequestBuilder, JobEntity,
};

use crate::client::{CloudFoundryClient, OperationOutput};
use crate::error::InvocationError;
use crate::transport::Transport;

/// Application operations bound to a client.
#[derive(Debug)]
pub struct Applications<'a, T: Transport> {
    client: &'a CloudFoundryClient<T>,
}

impl<'a, T: Transport> Applications<'a, T> {
    pub(crate) fn new(client: &'a CloudFoundryClient<T>) -> Self {
        Self { client }
    }

    /// Maps a route to the application.
    pub async fn associate_route(
        &self,
        request: AssociateApplicationRouteRequest,
    ) -> Result<OperationOutput<AssociateApplicationRouteRequest>, InvocationError> {
        self.client.invoke(request).await
    }

    /// Copies the bits of another application into this one.
    ///
    /// The copy runs server side; the result describes the job doing it.
    pub async fn copy(
        &self,
        request: CopyApplicationRequest,
    ) -> Result<OperationOutput<CopyApplicationRequest>, InvocationError> {
        self.client.invoke(request).await
    }
}
