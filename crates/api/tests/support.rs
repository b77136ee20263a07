//! Shared helpers for `contactsync-api` integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use contactsync_core::{
    ContactGateway, ContactRepository, ContactResolver, ContactSyncService, DeliveryEngine,
    GatewayResponse, RetryPolicy,
};
use contactsync_domain::{
    ContactRecords, ContactSyncError, CustomerRecord, Result as DomainResult, SubscriptionRecord,
    SyncPayload,
};
use parking_lot::Mutex;

/// Repository serving a fixed set of ISX rows.
pub struct FixtureRepository;

#[async_trait]
impl ContactRepository for FixtureRepository {
    async fn fetch_contact_records(&self, customer_ids: &[String]) -> DomainResult<ContactRecords> {
        if !customer_ids.iter().any(|id| id == "C001") {
            return Ok(ContactRecords::default());
        }
        Ok(ContactRecords {
            customers: vec![CustomerRecord {
                customer_id: "C001".into(),
                company: Some("PT Nusa Net".into()),
                branch: Some("062".into()),
            }],
            subscriptions: vec![SubscriptionRecord {
                subscription_id: "S10".into(),
                service: Some("Dedicated".into()),
                account: Some("Kantor Pusat".into()),
                address: Some("Jl. Merdeka 1".into()),
            }],
        })
    }
}

/// Repository whose datastore is always down.
pub struct UnavailableRepository;

#[async_trait]
impl ContactRepository for UnavailableRepository {
    async fn fetch_contact_records(&self, _customer_ids: &[String]) -> DomainResult<ContactRecords> {
        Err(ContactSyncError::Database("connection pool is closed".into()))
    }
}

/// Gateway that answers 200 and records every payload.
#[derive(Clone, Default)]
pub struct RecordingGateway {
    payloads: Arc<Mutex<Vec<SyncPayload>>>,
}

impl RecordingGateway {
    pub fn payloads(&self) -> Vec<SyncPayload> {
        self.payloads.lock().clone()
    }

    /// Wait until at least `count` payloads have arrived.
    pub async fn wait_for(&self, count: usize) -> Vec<SyncPayload> {
        for _ in 0..200 {
            let payloads = self.payloads();
            if payloads.len() >= count {
                return payloads;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("gateway never received {count} payload(s)");
    }
}

#[async_trait]
impl ContactGateway for RecordingGateway {
    async fn post_contact(&self, payload: &SyncPayload) -> DomainResult<GatewayResponse> {
        self.payloads.lock().push(payload.clone());
        Ok(GatewayResponse::new(200, r#"{"message":"ok"}"#))
    }
}

pub fn service(
    repository: Arc<dyn ContactRepository>,
    gateway: &RecordingGateway,
) -> Arc<ContactSyncService> {
    let policy = RetryPolicy::new(3, Duration::from_millis(1)).with_jitter(Duration::ZERO);
    let engine = Arc::new(DeliveryEngine::new(Arc::new(gateway.clone()), policy));
    Arc::new(ContactSyncService::new(ContactResolver::new(repository), engine))
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
