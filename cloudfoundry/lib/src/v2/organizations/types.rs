//! Organization request and entity types.

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::method::RestMethod;
use crate::request::{Operation, OrderDirection, Pagination, QueryParams};
use crate::response::{NoContent, PaginatedResources, SingleResource};
use crate::validation::{Validate, ValidationResult};

/// An organization as the Cloud Controller describes it.
///
/// Every field is optional; a field absent from the response body decodes
/// to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationEntity {
    pub name: Option<String>,
    pub billing_enabled: Option<bool>,
    #[serde(rename = "quota_definition_guid")]
    pub quota_definition_id: Option<String>,
    pub status: Option<String>,
    pub default_isolation_segment_guid: Option<String>,
    pub quota_definition_url: Option<String>,
    pub spaces_url: Option<String>,
    pub domains_url: Option<String>,
    pub private_domains_url: Option<String>,
    pub users_url: Option<String>,
    pub managers_url: Option<String>,
    pub billing_managers_url: Option<String>,
    pub auditors_url: Option<String>,
    #[serde(rename = "app_events_url")]
    pub application_events_url: Option<String>,
    pub space_quota_definitions_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Auditors
// ---------------------------------------------------------------------------

/// Adds a user to an organization's auditors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociateAuditorRequest {
    auditor_id: Option<String>,
    organization_id: Option<String>,
}

impl AssociateAuditorRequest {
    pub fn builder() -> AssociateAuditorRequestBuilder {
        AssociateAuditorRequestBuilder::default()
    }

    /// The UAA id of the user.
    pub fn auditor_id(&self) -> Option<&str> {
        self.auditor_id.as_deref()
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct AssociateAuditorRequestBuilder {
    inner: AssociateAuditorRequest,
}

impl AssociateAuditorRequestBuilder {
    pub fn auditor_id(mut self, auditor_id: impl Into<String>) -> Self {
        self.inner.auditor_id = Some(auditor_id.into());
        self
    }

    pub fn organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.inner.organization_id = Some(organization_id.into());
        self
    }

    pub fn build(self) -> AssociateAuditorRequest {
        self.inner
    }
}

impl Validate for AssociateAuditorRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder()
            .require_non_empty("auditor_id", &self.auditor_id)
            .require_non_empty("organization_id", &self.organization_id)
            .build()
    }
}

impl Operation for AssociateAuditorRequest {
    type Format = SingleResource<OrganizationEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("associate_organization_auditor")
            .method(RestMethod::Put)
            .path("/v2/organizations/{organization_id}/auditors/{auditor_id}")
            .description("Associate Auditor with the Organization")
            .build()
    }

    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("organization_id", self.organization_id()),
            ("auditor_id", self.auditor_id()),
        ]
    }
}

/// Removes a user from an organization's auditors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveAuditorRequest {
    auditor_id: Option<String>,
    organization_id: Option<String>,
}

impl RemoveAuditorRequest {
    pub fn builder() -> RemoveAuditorRequestBuilder {
        RemoveAuditorRequestBuilder::default()
    }

    pub fn auditor_id(&self) -> Option<&str> {
        self.auditor_id.as_deref()
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct RemoveAuditorRequestBuilder {
    inner: RemoveAuditorRequest,
}

impl RemoveAuditorRequestBuilder {
    pub fn auditor_id(mut self, auditor_id: impl Into<String>) -> Self {
        self.inner.auditor_id = Some(auditor_id.into());
        self
    }

    pub fn organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.inner.organization_id = Some(organization_id.into());
        self
    }

    pub fn build(self) -> RemoveAuditorRequest {
        self.inner
    }
}

impl Validate for RemoveAuditorRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder()
            .require_non_empty("auditor_id", &self.auditor_id)
            .require_non_empty("organization_id", &self.organization_id)
            .build()
    }
}

impl Operation for RemoveAuditorRequest {
    type Format = NoContent;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("remove_organization_auditor")
            .method(RestMethod::Delete)
            .path("/v2/organizations/{organization_id}/auditors/{auditor_id}")
            .build()
    }

    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("organization_id", self.organization_id()),
            ("auditor_id", self.auditor_id()),
        ]
    }
}

// ---------------------------------------------------------------------------
// Billing managers and managers
// ---------------------------------------------------------------------------

/// Adds a user to an organization's billing managers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociateBillingManagerRequest {
    billing_manager_id: Option<String>,
    id: Option<String>,
}

impl AssociateBillingManagerRequest {
    pub fn builder() -> AssociateBillingManagerRequestBuilder {
        AssociateBillingManagerRequestBuilder::default()
    }

    pub fn billing_manager_id(&self) -> Option<&str> {
        self.billing_manager_id.as_deref()
    }

    /// The organization id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct AssociateBillingManagerRequestBuilder {
    inner: AssociateBillingManagerRequest,
}

impl AssociateBillingManagerRequestBuilder {
    pub fn billing_manager_id(mut self, billing_manager_id: impl Into<String>) -> Self {
        self.inner.billing_manager_id = Some(billing_manager_id.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    pub fn build(self) -> AssociateBillingManagerRequest {
        self.inner
    }
}

impl Validate for AssociateBillingManagerRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder()
            .require_non_empty("billing_manager_id", &self.billing_manager_id)
            .require_non_empty("id", &self.id)
            .build()
    }
}

impl Operation for AssociateBillingManagerRequest {
    type Format = SingleResource<OrganizationEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("associate_organization_billing_manager")
            .method(RestMethod::Put)
            .path("/v2/organizations/{id}/billing_managers/{billing_manager_id}")
            .build()
    }

    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("id", self.id()),
            ("billing_manager_id", self.billing_manager_id()),
        ]
    }
}

/// Adds a user to an organization's managers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociateManagerRequest {
    id: Option<String>,
    manager_id: Option<String>,
}

impl AssociateManagerRequest {
    pub fn builder() -> AssociateManagerRequestBuilder {
        AssociateManagerRequestBuilder::default()
    }

    /// The organization id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn manager_id(&self) -> Option<&str> {
        self.manager_id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct AssociateManagerRequestBuilder {
    inner: AssociateManagerRequest,
}

impl AssociateManagerRequestBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    pub fn manager_id(mut self, manager_id: impl Into<String>) -> Self {
        self.inner.manager_id = Some(manager_id.into());
        self
    }

    pub fn build(self) -> AssociateManagerRequest {
        self.inner
    }
}

impl Validate for AssociateManagerRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder()
            .require_non_empty("id", &self.id)
            .require_non_empty("manager_id", &self.manager_id)
            .build()
    }
}

impl Operation for AssociateManagerRequest {
    type Format = SingleResource<OrganizationEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("associate_organization_manager")
            .method(RestMethod::Put)
            .path("/v2/organizations/{id}/managers/{manager_id}")
            .build()
    }

    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("id", self.id()), ("manager_id", self.manager_id())]
    }
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Retrieves one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOrganizationRequest {
    id: Option<String>,
}

impl GetOrganizationRequest {
    pub fn builder() -> GetOrganizationRequestBuilder {
        GetOrganizationRequestBuilder::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct GetOrganizationRequestBuilder {
    inner: GetOrganizationRequest,
}

impl GetOrganizationRequestBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    pub fn build(self) -> GetOrganizationRequest {
        self.inner
    }
}

impl Validate for GetOrganizationRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder().require_non_empty("id", &self.id).build()
    }
}

impl Operation for GetOrganizationRequest {
    type Format = SingleResource<OrganizationEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("get_organization")
            .method(RestMethod::Get)
            .path("/v2/organizations/{id}")
            .build()
    }

    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("id", self.id())]
    }
}

/// Lists organizations, optionally filtered.
///
/// Each filter accepts several values and matches any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOrganizationsRequest {
    auditor_ids: Vec<String>,
    names: Vec<String>,
    space_ids: Vec<String>,
    statuses: Vec<String>,
    user_ids: Vec<String>,
    pagination: Pagination,
}

impl ListOrganizationsRequest {
    pub fn builder() -> ListOrganizationsRequestBuilder {
        ListOrganizationsRequestBuilder::default()
    }

    pub fn auditor_ids(&self) -> &[String] {
        &self.auditor_ids
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn space_ids(&self) -> &[String] {
        &self.space_ids
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn user_ids(&self) -> &[String] {
        &self.user_ids
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

#[derive(Debug, Default)]
pub struct ListOrganizationsRequestBuilder {
    inner: ListOrganizationsRequest,
}

impl ListOrganizationsRequestBuilder {
    pub fn auditor_id(mut self, auditor_id: impl Into<String>) -> Self {
        self.inner.auditor_ids.push(auditor_id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.inner.names.push(name.into());
        self
    }

    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn space_id(mut self, space_id: impl Into<String>) -> Self {
        self.inner.space_ids.push(space_id.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.inner.statuses.push(status.into());
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.inner.user_ids.push(user_id.into());
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

    pub fn build(self) -> ListOrganizationsRequest {
        self.inner
    }
}

impl Validate for ListOrganizationsRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::default()
    }
}

impl Operation for ListOrganizationsRequest {
    type Format = PaginatedResources<OrganizationEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("list_organizations")
            .method(RestMethod::Get)
            .path("/v2/organizations")
            .build()
    }

    fn query(&self) -> QueryParams {
        QueryParams::new()
            .filter("auditor_guid", &self.auditor_ids)
            .filter("name", &self.names)
            .filter("space_guid", &self.space_ids)
            .filter("status", &self.statuses)
            .filter("user_guid", &self.user_ids)
            .paginate(&self.pagination)
    }
}
