//! Port interfaces for the NusaContact API

use async_trait::async_trait;
use contactsync_domain::{Result, SyncPayload};

/// Raw HTTP answer from one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: String,
}

impl GatewayResponse {
    /// Response with `status` and a raw `body`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Single-shot transport to the contacts endpoint
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// POST `payload` once.
    ///
    /// Any HTTP status, including 4xx and 5xx, comes back as `Ok`. `Err` is
    /// reserved for failures where no response was received (timeout,
    /// connection refused, DNS, unreadable body).
    async fn post_contact(&self, payload: &SyncPayload) -> Result<GatewayResponse>;
}
