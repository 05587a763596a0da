//! Service usage event request and entity types.

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::method::RestMethod;
use crate::request::{Operation, OrderDirection, Pagination, QueryParams};
use crate::response::{NoContent, PaginatedResources, SingleResource};
use crate::validation::{Validate, ValidationResult};

/// A change in the lifecycle of a service instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUsageEventEntity {
    /// `CREATED`, `UPDATED` or `DELETED`.
    pub state: Option<String>,
    #[serde(rename = "org_guid")]
    pub organization_id: Option<String>,
    #[serde(rename = "space_guid")]
    pub space_id: Option<String>,
    pub space_name: Option<String>,
    #[serde(rename = "service_instance_guid")]
    pub service_instance_id: Option<String>,
    pub service_instance_name: Option<String>,
    pub service_instance_type: Option<String>,
    #[serde(rename = "service_plan_guid")]
    pub service_plan_id: Option<String>,
    pub service_plan_name: Option<String>,
    #[serde(rename = "service_guid")]
    pub service_id: Option<String>,
    pub service_label: Option<String>,
}

/// Retrieves one service usage event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetServiceUsageEventRequest {
    id: Option<String>,
}

impl GetServiceUsageEventRequest {
    pub fn builder() -> GetServiceUsageEventRequestBuilder {
        GetServiceUsageEventRequestBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct GetServiceUsageEventRequestBuilder {
    inner: GetServiceUsageEventRequest,
}

impl GetServiceUsageEventRequestBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    pub fn build(self) -> GetServiceUsageEventRequest {
        self.inner
    }
}

impl Validate for GetServiceUsageEventRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder().require_non_empty("id", &self.id).build()
    }
}

impl Operation for GetServiceUsageEventRequest {
    type Format = SingleResource<ServiceUsageEventEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("get_service_usage_event")
            .method(RestMethod::Get)
            .path("/v2/service_usage_events/{id}")
            .build()
    }

    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("id", self.id())]
    }
}

/// Lists service usage events.
///
/// `after_id` restricts the page to events recorded after the given event,
/// which is how consumers resume reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListServiceUsageEventsRequest {
    after_id: Option<String>,
    service_ids: Vec<String>,
    service_instance_types: Vec<String>,
    pagination: Pagination,
}

impl ListServiceUsageEventsRequest {
    pub fn builder() -> ListServiceUsageEventsRequestBuilder {
        ListServiceUsageEventsRequestBuilder::default()
    }

    pub fn after_id(&self) -> Option<&str> {
        self.after_id.as_deref()
    }

    pub fn service_ids(&self) -> &[String] {
        &self.service_ids
    }

    pub fn service_instance_types(&self) -> &[String] {
        &self.service_instance_types
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

#[derive(Debug, Default)]
pub struct ListServiceUsageEventsRequestBuilder {
    inner: ListServiceUsageEventsRequest,
}

impl ListServiceUsageEventsRequestBuilder {
    pub fn after_id(mut self, after_id: impl Into<String>) -> Self {
        self.inner.after_id = Some(after_id.into());
        self
    }

    pub fn service_id(mut self, service_id: impl Into<String>) -> Self {
        self.inner.service_ids.push(service_id.into());
        self
    }

    /// `managed_service_instance` or `user_provided_service_instance`.
    pub fn service_instance_type(mut self, service_instance_type: impl Into<String>) -> Self {
        self.inner
            .service_instance_types
            .push(service_instance_type.into());
        self
    }

    pub fn page(mut self, page: i32) -> Self {
        self.inner.pagination.page = Some(page);
        self
    }

    pub fn results_per_page(mut self, results_per_page: u32) -> Self {
        self.inner.pagination.results_per_page = Some(results_per_page);
        self
    }

    pub fn order_direction(mut self, order_direction: OrderDirection) -> Self {
        self.inner.pagination.order_direction = Some(order_direction);
        self
    }

    pub fn build(self) -> ListServiceUsageEventsRequest {
        self.inner
    }
}

impl Validate for ListServiceUsageEventsRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::default()
    }
}

impl Operation for ListServiceUsageEventsRequest {
    type Format = PaginatedResources<ServiceUsageEventEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("list_service_usage_events")
            .method(RestMethod::Get)
            .path("/v2/service_usage_events")
            .build()
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("after_guid", self.after_id())
            .filter("service_guid", &self.service_ids)
            .filter("service_instance_type", &self.service_instance_types)
            .paginate(&self.pagination)
    }
}

/// Purges all service usage events and reseeds them from current state.
///
/// Takes no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeAndReseedServiceUsageEventsRequest;

impl Validate for PurgeAndReseedServiceUsageEventsRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::default()
    }
}

impl Operation for PurgeAndReseedServiceUsageEventsRequest {
    type Format = NoContent;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("purge_and_reseed_service_usage_events")
            .method(RestMethod::Post)
            .path("/v2/service_usage_events/destructively_purge_all_and_reseed")
            .build()
    }
}
