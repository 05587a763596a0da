//! Service usage event operations.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | `get` | GET | `/v2/service_usage_events/{id}` |
//! | `list` | GET | `/v2/service_usage_events` |
//! | `purge_and_reseed` | POST | `/v2/service_usage_events/destructively_purge_all_and_reseed` |

mod types;

pub use types::{
    GetServiceUsageEventRequest, GetServiceUsageEventRequestBuilder,
    ListServiceUsageEventsRequest, ListServiceUsageEventsRequestBuilder,
    PurgeAndReseedServiceUsageEventsRequest, ServiceUsageEventEntity,
};

use crate::client::{CloudFoundryClient, OperationOutput};
use crate::error::InvocationError;
use crate::transport::Transport;

/// Service usage event operations bound to a client.
#[derive(Debug)]
pub struct ServiceUsageEvents<'a, T: Transport> {
    client: &'a CloudFoundryClient<T>,
}

impl<'a, T: Transport> ServiceUsageEvents<'a, T> {
    pub(crate) fn new(client: &'a CloudFoundryClient<T>) -> Self {
        Self { client }
    }

    pub async fn get(
        &self,
        request: GetServiceUsageEventRequest,
    ) -> Result<OperationOutput<GetServiceUsageEventRequest>, InvocationError> {
        self.client.invoke(request).await
    }

    pub async fn list(
        &self,
        request: ListServiceUsageEventsRequest,
    ) -> Result<OperationOutput<ListServiceUsageEventsRequest>, InvocationError> {
        self.client.invoke(request).await
    }

    /// Deletes every recorded event and seeds one `CREATED` event per
    /// existing service instance.
    pub async fn purge_and_reseed(
        &self,
        request: PurgeAndReseedServiceUsageEventsRequest,
    ) -> Result<(), InvocationError> {
        self.client.invoke(request).await
    }
}
