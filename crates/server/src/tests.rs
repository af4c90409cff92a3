// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode as HttpStatusCode},
};
use serde::de::DeserializeOwned;
use tender_bid_domain::OrganizationType;
use tower::ServiceExt;

struct TestContext {
    app: Router,
    organization_id: String,
    outsider_id: String,
}

/// Helper to create a router over an in-memory store with one organization,
/// its responsible `alice`, and an unaffiliated employee `bob`.
fn create_test_context() -> TestContext {
    let mut persistence: Persistence =
        Persistence::new_in_memory().expect("Failed to create in-memory persistence");
    let organization_id: String = persistence
        .create_organization("Acme", "Road works", OrganizationType::JointStockCompany)
        .unwrap();
    let alice_id: String = persistence.create_employee("alice", None, None).unwrap();
    let outsider_id: String = persistence.create_employee("bob", None, None).unwrap();
    persistence
        .add_organization_responsible(&organization_id, &alice_id)
        .unwrap();

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };
    TestContext {
        app: build_router(app_state),
        organization_id,
        outsider_id,
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<String>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

async fn create_tender_via_http(ctx: &TestContext, name: &str) -> TenderResponse {
    let body: String = serde_json::json!({
        "name": name,
        "description": "Fix potholes",
        "serviceType": "Construction",
        "organizationId": ctx.organization_id,
        "creatorUsername": "alice",
    })
    .to_string();
    let response = send(&ctx.app, "POST", "/api/tenders/new", Some(body)).await;
    assert_eq!(response.status(), HttpStatusCode::OK);
    read_json(response).await
}

async fn create_bid_via_http(ctx: &TestContext, tender_id: &str, name: &str) -> BidResponse {
    let body: String = serde_json::json!({
        "name": name,
        "description": "Offer",
        "tenderId": tender_id,
        "authorType": "User",
        "authorId": ctx.outsider_id,
    })
    .to_string();
    let response = send(&ctx.app, "POST", "/api/bids/new", Some(body)).await;
    assert_eq!(response.status(), HttpStatusCode::OK);
    read_json(response).await
}

#[tokio::test]
async fn test_ping_returns_ok() {
    let ctx: TestContext = create_test_context();

    let response = send(&ctx.app, "GET", "/api/ping", None).await;

    assert_eq!(response.status(), HttpStatusCode::OK);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body_bytes[..], b"ok");
}

#[tokio::test]
async fn test_create_tender_returns_camel_case_tender() {
    let ctx: TestContext = create_test_context();
    let body: String = serde_json::json!({
        "name": "Road repair",
        "description": "Fix potholes",
        "serviceType": "Construction",
        "organizationId": ctx.organization_id,
        "creatorUsername": "alice",
    })
    .to_string();

    let response = send(&ctx.app, "POST", "/api/tenders/new", Some(body)).await;
    assert_eq!(response.status(), HttpStatusCode::OK);

    let json: serde_json::Value = read_json(response).await;
    assert_eq!(json["serviceType"], "Construction");
    assert_eq!(json["status"], "CREATED");
    assert_eq!(json["version"], 1);
    assert!(json["createdAt"].is_string());
}

#[tokio::test]
async fn test_missing_username_is_unauthorized() {
    let ctx: TestContext = create_test_context();

    let response = send(&ctx.app, "GET", "/api/tenders/my", None).await;

    assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    let error: ErrorResponse = read_json(response).await;
    assert!(error.error);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let ctx: TestContext = create_test_context();

    let response = send(
        &ctx.app,
        "POST",
        "/api/tenders/new",
        Some(String::from("{not json")),
    )
    .await;

    assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert!(error.message.starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_unknown_tender_status_is_not_found() {
    let ctx: TestContext = create_test_context();

    let response = send(
        &ctx.app,
        "GET",
        "/api/tenders/missing/status?username=alice",
        None,
    )
    .await;

    assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_set_status_via_query() {
    let ctx: TestContext = create_test_context();
    let tender: TenderResponse = create_tender_via_http(&ctx, "Road repair").await;

    let uri: String = format!("/api/tenders/{}/status?status=published&username=alice", tender.id);
    let response = send(&ctx.app, "PUT", &uri, None).await;
    assert_eq!(response.status(), HttpStatusCode::OK);
    let status: StatusResponse = read_json(response).await;
    assert_eq!(status.status, "PUBLISHED");

    let uri: String = format!("/api/tenders/{}/status?username=alice", tender.id);
    let response = send(&ctx.app, "PUT", &uri, None).await;
    assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_numeric_rollback_version_is_bad_request() {
    let ctx: TestContext = create_test_context();
    let tender: TenderResponse = create_tender_via_http(&ctx, "Road repair").await;

    let uri: String = format!("/api/tenders/{}/rollback/first?username=alice", tender.id);
    let response = send(&ctx.app, "PUT", &uri, None).await;

    assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert!(error.message.contains("first"));
}

#[tokio::test]
async fn test_edit_and_rollback_scenario() {
    let ctx: TestContext = create_test_context();
    let tender: TenderResponse = create_tender_via_http(&ctx, "Road repair").await;
    let edit_body: String = serde_json::json!({ "name": "Bridge repair" }).to_string();

    let uri: String = format!("/api/tenders/{}/edit?username=bob", tender.id);
    let response = send(&ctx.app, "PATCH", &uri, Some(edit_body.clone())).await;
    assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);

    let uri: String = format!("/api/tenders/{}/edit?username=alice", tender.id);
    let response = send(&ctx.app, "PATCH", &uri, Some(edit_body)).await;
    assert_eq!(response.status(), HttpStatusCode::OK);
    let edited: TenderResponse = read_json(response).await;
    assert_eq!(edited.version, 2);

    let uri: String = format!("/api/tenders/{}/versions?username=alice", tender.id);
    let response = send(&ctx.app, "GET", &uri, None).await;
    let versions: Vec<TenderVersionResponse> = read_json(response).await;
    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].name, "Road repair");

    let uri: String = format!("/api/tenders/{}/rollback/1?username=alice", tender.id);
    let response = send(&ctx.app, "PUT", &uri, None).await;
    assert_eq!(response.status(), HttpStatusCode::OK);
    let rolled_back: TenderResponse = read_json(response).await;
    assert_eq!(rolled_back.name, "Road repair");
    assert_eq!(rolled_back.version, 3);
}

#[tokio::test]
async fn test_empty_edit_is_bad_request() {
    let ctx: TestContext = create_test_context();
    let tender: TenderResponse = create_tender_via_http(&ctx, "Road repair").await;

    let uri: String = format!("/api/tenders/{}/edit?username=alice", tender.id);
    let response = send(&ctx.app, "PATCH", &uri, Some(String::from("{}"))).await;

    assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_tenders_filters_by_service_type() {
    let ctx: TestContext = create_test_context();
    create_tender_via_http(&ctx, "Road repair").await;

    let response = send(&ctx.app, "GET", "/api/tenders?service_type=Delivery", None).await;
    let tenders: Vec<TenderSummaryResponse> = read_json(response).await;
    assert!(tenders.is_empty());

    let response = send(&ctx.app, "GET", "/api/tenders", None).await;
    let tenders: Vec<TenderSummaryResponse> = read_json(response).await;
    assert_eq!(tenders.len(), 1);
}

#[tokio::test]
async fn test_bid_paging_and_decision() {
    let ctx: TestContext = create_test_context();
    let tender: TenderResponse = create_tender_via_http(&ctx, "Road repair").await;
    let mut bids: Vec<BidResponse> = Vec::new();
    for name in ["A", "B", "C"] {
        bids.push(create_bid_via_http(&ctx, &tender.id, name).await);
    }

    let response = send(
        &ctx.app,
        "GET",
        "/api/bids/my?username=bob&limit=1&offset=1",
        None,
    )
    .await;
    let page: Vec<BidResponse> = read_json(response).await;
    let names: Vec<&str> = page.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["B"]);

    let uri: String = format!("/api/bids/{}/list?username=alice&limit=abc", tender.id);
    let response = send(&ctx.app, "GET", &uri, None).await;
    let listed: Vec<BidResponse> = read_json(response).await;
    assert_eq!(listed.len(), 3);

    let uri: String = format!(
        "/api/bids/{}/submit_decision?decision=Approved&username=alice",
        bids[0].id
    );
    let response = send(&ctx.app, "PUT", &uri, None).await;
    assert_eq!(response.status(), HttpStatusCode::OK);

    let uri: String = format!("/api/tenders/{}/status?username=bob", tender.id);
    let response = send(&ctx.app, "GET", &uri, None).await;
    let status: StatusResponse = read_json(response).await;
    assert_eq!(status.status, "CLOSED");
}

#[tokio::test]
async fn test_bid_for_unknown_author_is_unauthorized() {
    let ctx: TestContext = create_test_context();
    let tender: TenderResponse = create_tender_via_http(&ctx, "Road repair").await;
    let body: String = serde_json::json!({
        "name": "Offer",
        "description": "",
        "tenderId": tender.id,
        "authorType": "Organization",
        "authorId": "ghost",
    })
    .to_string();

    let response = send(&ctx.app, "POST", "/api/bids/new", Some(body)).await;

    assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
}
