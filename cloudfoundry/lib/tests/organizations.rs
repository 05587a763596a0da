//! Integration tests for the organization operations.
//!
//! Requests go through the real `reqwest` transport against a wiremock
//! server answering with recorded Cloud Controller payloads.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use cloudfoundry_client::v2::organizations::{
    AssociateAuditorRequest, AssociateBillingManagerRequest, AssociateManagerRequest,
    GetOrganizationRequest, ListOrganizationsRequest, OrganizationEntity, RemoveAuditorRequest,
};
use cloudfoundry_client::{InvocationError, Metadata, Resource};
use common::{StubTransport, client_for};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORGANIZATION_ID: &str = "83c4fac5-cd9e-41ee-96df-b4f50fff4aef";

fn organization(
    guid: &str,
    name: &str,
    quota: &str,
    created_at: DateTime<Utc>,
) -> Resource<OrganizationEntity> {
    let base = format!("/v2/organizations/{guid}");
    let url = |suffix: &str| Some(format!("{base}/{suffix}"));

    Resource {
        metadata: Metadata {
            id: guid.to_string(),
            url: base.clone(),
            created_at,
            updated_at: None,
        },
        entity: OrganizationEntity {
            name: Some(name.to_string()),
            billing_enabled: Some(false),
            quota_definition_id: Some(quota.to_string()),
            status: Some("active".to_string()),
            default_isolation_segment_guid: None,
            quota_definition_url: Some(format!("/v2/quota_definitions/{quota}")),
            spaces_url: url("spaces"),
            domains_url: url("domains"),
            private_domains_url: url("private_domains"),
            users_url: url("users"),
            managers_url: url("managers"),
            billing_managers_url: url("billing_managers"),
            auditors_url: url("auditors"),
            application_events_url: url("app_events"),
            space_quota_definitions_url: url("space_quota_definitions"),
        },
    }
}

fn created_2015_07_27(minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 7, 27, 22, minute, second).unwrap()
}

#[tokio::test]
async fn test_associate_auditor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/v2/organizations/{ORGANIZATION_ID}/auditors/uaa-id-71")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(201).set_body_string(include_str!(
            "fixtures/v2/organizations/PUT_{id}_auditors_{auditor-id}_response.json"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = AssociateAuditorRequest::builder()
        .auditor_id("uaa-id-71")
        .organization_id(ORGANIZATION_ID)
        .build();

    let actual = client_for(&mock_server)
        .organizations()
        .associate_auditor(request)
        .await
        .unwrap();

    let expected = organization(
        ORGANIZATION_ID,
        "name-187",
        "1d18a00b-4e36-412b-9308-2f5f2402e880",
        created_2015_07_27(43, 10),
    );
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_associate_auditor_malformed_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("/v2/organizations/{ORGANIZATION_ID}/auditors/uaa-id-71")))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let request = AssociateAuditorRequest::builder()
        .auditor_id("uaa-id-71")
        .organization_id(ORGANIZATION_ID)
        .build();

    let err = client_for(&mock_server)
        .organizations()
        .associate_auditor(request)
        .await
        .unwrap_err();

    let api_error = err.as_api_error().expect("expected an API error");
    assert_eq!(api_error.code(), 500);
    assert_eq!(api_error.status(), 500);
    assert_eq!(api_error.description(), "Internal Server Error");
    assert!(api_error.is_fallback());
}

#[tokio::test]
async fn test_associate_auditor_invalid_request_sends_nothing() {
    let transport = StubTransport::new(201, "{}");
    let client = transport.client();

    let request = AssociateAuditorRequest::builder().auditor_id("uaa-id-71").build();
    let err = client.organizations().associate_auditor(request).await.unwrap_err();

    match err {
        InvocationError::Validation(e) => {
            assert_eq!(e.messages(), ["organization id must be specified"]);
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_associate_auditor_invalid_request_reports_every_field() {
    let transport = StubTransport::new(201, "{}");

    let err = transport
        .client()
        .organizations()
        .associate_auditor(AssociateAuditorRequest::default())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Request is invalid: auditor id must be specified, organization id must be specified"
    );
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_get_with_empty_id_sends_nothing() {
    let transport = StubTransport::new(200, "{}");

    let request = GetOrganizationRequest::builder().id("").build();
    let err = transport.client().organizations().get(request).await.unwrap_err();

    assert_eq!(err.to_string(), "Request is invalid: id must not be empty");
    assert!(err.is_pre_dispatch());
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_remove_auditor_with_empty_organization_id_sends_nothing() {
    let transport = StubTransport::new(204, "");

    let request = RemoveAuditorRequest::builder()
        .auditor_id("uaa-id-71")
        .organization_id("")
        .build();
    let err = transport
        .client()
        .organizations()
        .remove_auditor(request)
        .await
        .unwrap_err();

    assert!(matches!(err, InvocationError::Validation(_)));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_remove_auditor() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("/v2/organizations/{ORGANIZATION_ID}/auditors/uaa-id-71")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = RemoveAuditorRequest::builder()
        .auditor_id("uaa-id-71")
        .organization_id(ORGANIZATION_ID)
        .build();

    client_for(&mock_server)
        .organizations()
        .remove_auditor(request)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_associate_billing_manager() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2/organizations/test-id/billing_managers/test-billing-manager-id"))
        .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
            "fixtures/v2/organizations/PUT_{id}_billing_managers_{billing-manager-id}_response.json"
        )))
        .mount(&mock_server)
        .await;

    let request = AssociateBillingManagerRequest::builder()
        .billing_manager_id("test-billing-manager-id")
        .id("test-id")
        .build();

    let actual = client_for(&mock_server)
        .organizations()
        .associate_billing_manager(request)
        .await
        .unwrap();

    let expected = organization(
        "39ab104d-79f9-4bac-82e0-35b826a236b8",
        "name-200",
        "ab51f0d8-1920-4bfc-9401-cd0e978e8c5e",
        created_2015_07_27(43, 10),
    );
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn test_associate_billing_manager_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2/organizations/test-id/billing_managers/test-billing-manager-id"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 10008,
            "description": "The request is semantically invalid: unknown user",
            "error_code": "CF-UnprocessableEntity"
        })))
        .mount(&mock_server)
        .await;

    let request = AssociateBillingManagerRequest::builder()
        .billing_manager_id("test-billing-manager-id")
        .id("test-id")
        .build();

    let err = client_for(&mock_server)
        .organizations()
        .associate_billing_manager(request)
        .await
        .unwrap_err();

    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.status(), 400);
    assert_eq!(api_error.code(), 10008);
    assert_eq!(api_error.error_code(), "CF-UnprocessableEntity");
    assert!(!api_error.is_fallback());
}

#[tokio::test]
async fn test_associate_manager() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v2/organizations/test-id/managers/test-manager-id"))
        .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
            "fixtures/v2/organizations/PUT_{id}_managers_{manager-id}_response.json"
        )))
        .mount(&mock_server)
        .await;

    let request = AssociateManagerRequest::builder()
        .id("test-id")
        .manager_id("test-manager-id")
        .build();

    let actual = client_for(&mock_server)
        .organizations()
        .associate_manager(request)
        .await
        .unwrap();

    assert_eq!(actual.metadata.id, "cc7c5224-f973-4358-a95a-dd72decbb20f");
    assert_eq!(actual.entity.name.as_deref(), Some("name-218"));
    assert_eq!(
        actual.entity.quota_definition_id.as_deref(),
        Some("57f59bb7-7581-4257-9502-cbd60bb92d99")
    );
}

#[tokio::test]
async fn test_get_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations/test-id"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(include_str!("fixtures/v2/errors/not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let request = GetOrganizationRequest::builder().id("test-id").build();
    let err = client_for(&mock_server)
        .organizations()
        .get(request)
        .await
        .unwrap_err();

    let api_error = err.as_api_error().unwrap();
    assert!(api_error.is_not_found());
    assert_eq!(api_error.code(), 30003);
    assert_eq!(
        err.to_string(),
        "CF-OrganizationNotFound(30003): The organization could not be found: test-id"
    );
}

#[tokio::test]
async fn test_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("q", "name IN test-name"))
        .and(query_param("page", "-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(include_str!("fixtures/v2/organizations/GET_response.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = ListOrganizationsRequest::builder()
        .name("test-name")
        .page(-1)
        .build();

    let page = client_for(&mock_server)
        .organizations()
        .list(request)
        .await
        .unwrap();

    assert_eq!(page.total_results, 1);
    assert_eq!(page.total_pages, 1);
    assert!(!page.has_next_page());
    assert_eq!(
        page.resources,
        vec![organization(
            "deb3c359-2261-45ba-b34f-ee7487acd71a",
            "the-system_domain-org-name",
            "9b56a1ec-4981-4a1e-9348-0d78eeca842c",
            created_2015_07_27(43, 5),
        )]
    );
}

#[tokio::test]
async fn test_list_query_is_percent_encoded() {
    let transport = StubTransport::new(
        200,
        include_str!("fixtures/v2/organizations/GET_response.json"),
    );

    let request = ListOrganizationsRequest::builder()
        .name("test-name")
        .page(-1)
        .build();
    transport.client().organizations().list(request).await.unwrap();

    let seen = transport.seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(
        seen[0].url().as_str(),
        "https://api.example.com/v2/organizations?q=name%20IN%20test-name&page=-1"
    );
}

#[tokio::test]
async fn test_list_rejects_page_larger_than_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 0,
            "total_pages": 1,
            "resources": [{
                "metadata": {
                    "guid": "g",
                    "url": "/v2/organizations/g",
                    "created_at": "2015-07-27T22:43:05Z"
                },
                "entity": {}
            }]
        })))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .organizations()
        .list(ListOrganizationsRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, InvocationError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn test_get_sends_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("/v2/organizations/{ORGANIZATION_ID}")))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_string(include_str!(
            "fixtures/v2/organizations/PUT_{id}_auditors_{auditor-id}_response.json"
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = GetOrganizationRequest::builder().id(ORGANIZATION_ID).build();
    let organization = client_for(&mock_server)
        .organizations()
        .get(request)
        .await
        .unwrap();

    assert_eq!(organization.metadata.id, ORGANIZATION_ID);
}
