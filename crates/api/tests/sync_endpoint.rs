//! Router tests for `POST /sync-is-nusacontact`
//!
//! Drives the real router through `tower::ServiceExt::oneshot` with an
//! in-memory datastore and a recording NusaContact gateway.

#[path = "support.rs"]
mod support;

use std::sync::Arc;

use axum::http::StatusCode;
use contactsync_api::{sync_router, SYNC_CONTACT_PATH};
use serde_json::json;
use support::{json_body, post_json, service, FixtureRepository, RecordingGateway, UnavailableRepository};
use tower::ServiceExt;

#[tokio::test]
async fn known_contact_is_acknowledged_and_delivered() {
    let gateway = RecordingGateway::default();
    let app = sync_router(service(Arc::new(FixtureRepository), &gateway));

    let body = json!({
        "contactNumber": "628123456789",
        "customerId": "C001",
        "contactName": "Budi"
    });
    let response = app.oneshot(post_json(SYNC_CONTACT_PATH, body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"success": true, "message": "Contact created successfully"})
    );

    let payloads = gateway.wait_for(1).await;
    assert_eq!(payloads[0].phone_number, "628123456789");
    assert_eq!(payloads[0].name, "Budi");
    assert_eq!(payloads[0].timezone, "Asia/Makassar");
    assert_eq!(payloads[0].branch_code, "062");
}

#[tokio::test]
async fn customer_id_list_is_accepted() {
    let gateway = RecordingGateway::default();
    let app = sync_router(service(Arc::new(FixtureRepository), &gateway));

    let body = json!({
        "contactNumber": "628123456789",
        "customerId": ["C001", "C999"],
        "contactName": "Budi"
    });
    let response = app.oneshot(post_json(SYNC_CONTACT_PATH, body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payloads = gateway.wait_for(1).await;
    let attributes: serde_json::Value = serde_json::from_str(&payloads[0].attributes).unwrap();
    let ids = attributes["ids"].as_str().unwrap();
    assert!(ids.starts_with("[C001]("), "ids: {ids}");
    assert!(ids.contains(", [C999]("), "ids: {ids}");
}

#[tokio::test]
async fn unknown_contact_is_404_without_delivery() {
    let gateway = RecordingGateway::default();
    let app = sync_router(service(Arc::new(FixtureRepository), &gateway));

    let body = json!({"contactNumber": "62811", "customerId": "C404", "contactName": "Nobody"});
    let response = app.oneshot(post_json(SYNC_CONTACT_PATH, body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({"success": false, "message": "Contact not found"}));
    tokio::task::yield_now().await;
    assert!(gateway.payloads().is_empty());
}

#[tokio::test]
async fn blank_customer_id_is_404() {
    let gateway = RecordingGateway::default();
    let app = sync_router(service(Arc::new(FixtureRepository), &gateway));

    let body = json!({"contactNumber": "62811", "customerId": " , ", "contactName": "Nobody"});
    let response = app.oneshot(post_json(SYNC_CONTACT_PATH, body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_500() {
    let gateway = RecordingGateway::default();
    let app = sync_router(service(Arc::new(FixtureRepository), &gateway));

    let response = app.oneshot(post_json(SYNC_CONTACT_PATH, "{ not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "message": "Internal server error"})
    );
}

#[tokio::test]
async fn missing_field_is_500() {
    let gateway = RecordingGateway::default();
    let app = sync_router(service(Arc::new(FixtureRepository), &gateway));

    let body = json!({"contactNumber": "62811", "contactName": "Budi"});
    let response = app.oneshot(post_json(SYNC_CONTACT_PATH, body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn datastore_failure_is_500() {
    let gateway = RecordingGateway::default();
    let app = sync_router(service(Arc::new(UnavailableRepository), &gateway));

    let body = json!({"contactNumber": "62811", "customerId": "C001", "contactName": "Budi"});
    let response = app.oneshot(post_json(SYNC_CONTACT_PATH, body.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"success": false, "message": "Internal server error"})
    );
    assert!(gateway.payloads().is_empty());
}

#[tokio::test]
async fn other_methods_are_rejected() {
    let gateway = RecordingGateway::default();
    let app = sync_router(service(Arc::new(FixtureRepository), &gateway));

    let request = axum::http::Request::builder()
        .method("GET")
        .uri(SYNC_CONTACT_PATH)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
