//! Application request and entity types.

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::endpoint::Endpoint;
use crate::method::RestMethod;
use crate::request::{Operation, json_body};
use crate::response::SingleResource;
use crate::validation::{Validate, ValidationResult};

/// An application as the Cloud Controller describes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationEntity {
    pub name: Option<String>,
    pub production: Option<bool>,
    #[serde(rename = "space_guid")]
    pub space_id: Option<String>,
    #[serde(rename = "stack_guid")]
    pub stack_id: Option<String>,
    pub buildpack: Option<String>,
    pub detected_buildpack: Option<String>,
    pub environment_json: Option<BTreeMap<String, Value>>,
    pub memory: Option<u64>,
    pub instances: Option<u32>,
    pub disk_quota: Option<u64>,
    pub state: Option<String>,
    pub version: Option<String>,
    pub command: Option<String>,
    pub console: Option<bool>,
    pub debug: Option<String>,
    pub staging_task_id: Option<String>,
    pub package_state: Option<String>,
    pub health_check_type: Option<String>,
    pub health_check_timeout: Option<u32>,
    pub staging_failed_reason: Option<String>,
    pub staging_failed_description: Option<String>,
    pub diego: Option<bool>,
    pub docker_image: Option<String>,
    pub package_updated_at: Option<String>,
    pub detected_start_command: Option<String>,
    pub enable_ssh: Option<bool>,
    pub ports: Option<Vec<u16>>,
    pub space_url: Option<String>,
    pub stack_url: Option<String>,
    pub events_url: Option<String>,
    pub service_bindings_url: Option<String>,
    pub routes_url: Option<String>,
    pub route_mappings_url: Option<String>,
}

/// A background job started by the Cloud Controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobEntity {
    #[serde(rename = "guid")]
    pub id: Option<String>,
    /// `queued`, `running`, `finished` or `failed`.
    pub status: Option<String>,
    pub error: Option<String>,
    pub error_details: Option<Value>,
}

/// Maps a route to an application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssociateApplicationRouteRequest {
    id: Option<String>,
    route_id: Option<String>,
}

impl AssociateApplicationRouteRequest {
    pub fn builder() -> AssociateApplicationRouteRequestBuilder {
        AssociateApplicationRouteRequestBuilder::default()
    }

    /// The application id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct AssociateApplicationRouteRequestBuilder {
    inner: AssociateApplicationRouteRequest,
}

impl AssociateApplicationRouteRequestBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    pub fn route_id(mut self, route_id: impl Into<String>) -> Self {
        self.inner.route_id = Some(route_id.into());
        self
    }

    pub fn build(self) -> AssociateApplicationRouteRequest {
        self.inner
    }
}

impl Validate for AssociateApplicationRouteRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder()
            .require_non_empty("id", &self.id)
            .require_non_empty("route_id", &self.route_id)
            .build()
    }
}

impl Operation for AssociateApplicationRouteRequest {
    type Format = SingleResource<ApplicationEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("associate_application_route")
            .method(RestMethod::Put)
            .path("/v2/apps/{id}/routes/{route_id}")
            .build()
    }

    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("id", self.id()), ("route_id", self.route_id())]
    }
}

/// Copies the bits of a source application into a target application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyApplicationRequest {
    #[serde(skip)]
    id: Option<String>,
    #[serde(rename = "source_app_guid")]
    source_app_id: Option<String>,
}

impl CopyApplicationRequest {
    pub fn builder() -> CopyApplicationRequestBuilder {
        CopyApplicationRequestBuilder::default()
    }

    /// The target application id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn source_app_id(&self) -> Option<&str> {
        self.source_app_id.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct CopyApplicationRequestBuilder {
    inner: CopyApplicationRequest,
}

impl CopyApplicationRequestBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.inner.id = Some(id.into());
        self
    }

    pub fn source_app_id(mut self, source_app_id: impl Into<String>) -> Self {
        self.inner.source_app_id = Some(source_app_id.into());
        self
    }

    pub fn build(self) -> CopyApplicationRequest {
        self.inner
    }
}

impl Validate for CopyApplicationRequest {
    fn validate(&self) -> ValidationResult {
        ValidationResult::builder()
            .require_non_empty("id", &self.id)
            .require_non_empty("source_app_id", &self.source_app_id)
            .build()
    }
}

impl Operation for CopyApplicationRequest {
    type Format = SingleResource<JobEntity>;

    fn endpoint() -> Endpoint<Self::Format> {
        Endpoint::builder()
            .id("copy_application")
            .method(RestMethod::Post)
            .path("/v2/apps/{id}/copy_bits")
            .build()
    }

    fn path_params(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("id", self.id())]
    }

    fn body(&self) -> Result<Option<Bytes>, serde_json::Error> {
        json_body(self)
    }
}
