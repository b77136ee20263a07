//! Shared test helpers for `contactsync-core` integration tests.
//!
//! In-memory implementations of the core ports so delivery and resolution
//! tests can focus on behaviour instead of I/O.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use contactsync_core::{ContactGateway, ContactRepository, GatewayResponse};
use contactsync_domain::{
    ContactRecords, ContactSyncError, CustomerRecord, Result as DomainResult, SubscriptionRecord,
    SyncPayload,
};
use parking_lot::Mutex;
use tokio::time::Instant;

/// Gateway that replays a fixed script of results.
///
/// The last entry repeats once the script runs out.
#[derive(Clone)]
pub struct ScriptedGateway {
    script: Arc<Mutex<VecDeque<DomainResult<GatewayResponse>>>>,
    calls: Arc<Mutex<Vec<(Instant, SyncPayload)>>>,
}

impl ScriptedGateway {
    pub fn new(script: Vec<DomainResult<GatewayResponse>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Gateway answering with `statuses` in order.
    pub fn statuses(statuses: &[u16]) -> Self {
        Self::new(
            statuses.iter().map(|status| Ok(GatewayResponse::new(*status, "{}"))).collect(),
        )
    }

    /// Gateway whose every call fails before a response arrives.
    pub fn transport_failure(message: &str) -> Self {
        Self::new(vec![Err(ContactSyncError::Network(message.to_string()))])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn payloads(&self) -> Vec<SyncPayload> {
        self.calls.lock().iter().map(|(_, payload)| payload.clone()).collect()
    }

    /// Time between consecutive calls.
    pub fn gaps(&self) -> Vec<std::time::Duration> {
        let calls = self.calls.lock();
        calls.windows(2).map(|pair| pair[1].0.duration_since(pair[0].0)).collect()
    }
}

#[async_trait]
impl ContactGateway for ScriptedGateway {
    async fn post_contact(&self, payload: &SyncPayload) -> DomainResult<GatewayResponse> {
        self.calls.lock().push((Instant::now(), payload.clone()));
        let mut script = self.script.lock();
        if script.len() > 1 {
            script.pop_front().unwrap_or_else(|| Err(ContactSyncError::Internal("empty".into())))
        } else {
            script.front().cloned().unwrap_or_else(|| Err(ContactSyncError::Internal("empty".into())))
        }
    }
}

/// Repository backed by fixture rows keyed by owning customer id.
#[derive(Default, Clone)]
pub struct InMemoryContactRepository {
    customers: Vec<CustomerRecord>,
    subscriptions: Vec<(String, SubscriptionRecord)>,
}

impl InMemoryContactRepository {
    pub fn with_customer(mut self, id: &str, company: Option<&str>, branch: &str) -> Self {
        self.customers.push(CustomerRecord {
            customer_id: id.to_string(),
            company: company.map(str::to_string),
            branch: Some(branch.to_string()),
        });
        self
    }

    pub fn with_subscription(
        mut self,
        owner: &str,
        subscription_id: &str,
        service: &str,
        account: &str,
        address: Option<&str>,
    ) -> Self {
        self.subscriptions.push((
            owner.to_string(),
            SubscriptionRecord {
                subscription_id: subscription_id.to_string(),
                service: Some(service.to_string()),
                account: Some(account.to_string()),
                address: address.map(str::to_string),
            },
        ));
        self
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn fetch_contact_records(&self, customer_ids: &[String]) -> DomainResult<ContactRecords> {
        let customers: Vec<_> = self
            .customers
            .iter()
            .filter(|row| customer_ids.contains(&row.customer_id))
            .cloned()
            .collect();
        if customers.is_empty() {
            return Ok(ContactRecords::default());
        }
        let subscriptions = self
            .subscriptions
            .iter()
            .filter(|(owner, _)| customer_ids.contains(owner))
            .map(|(_, row)| row.clone())
            .collect();
        Ok(ContactRecords { customers, subscriptions })
    }
}

pub fn sample_payload() -> SyncPayload {
    SyncPayload {
        phone_number: "628123456789".into(),
        name: "Budi".into(),
        timezone: "Asia/Jakarta".into(),
        branch_code: "020".into(),
        attributes: r#"{"ids":"","companies":""}"#.into(),
    }
}
