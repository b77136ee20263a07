//! Contact sync service - resolve, format, then hand off to delivery

use std::sync::Arc;

use contactsync_domain::{DeliveryOutcome, Result, SyncContactRequest, SyncPayload};
use tokio::task::JoinHandle;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::contact::formatter::format_contact;
use crate::contact::resolver::ContactResolver;
use crate::delivery::engine::DeliveryEngine;

/// Contact sync service
pub struct ContactSyncService {
    resolver: ContactResolver,
    engine: Arc<DeliveryEngine>,
}

impl ContactSyncService {
    /// Service resolving with `resolver` and delivering through `engine`.
    pub fn new(resolver: ContactResolver, engine: Arc<DeliveryEngine>) -> Self {
        Self { resolver, engine }
    }

    /// Resolve and format the contact named by `request`.
    ///
    /// `Ok(None)` means no customer matched. Any datastore access is finished
    /// by the time this returns.
    pub async fn prepare_payload(&self, request: &SyncContactRequest) -> Result<Option<SyncPayload>> {
        let Some(contact) = self.resolver.resolve(&request.customer_id).await? else {
            return Ok(None);
        };
        Ok(Some(format_contact(&request.contact_number, &contact, &request.contact_name)))
    }

    /// Start delivery on the runtime without waiting for it.
    ///
    /// The loop runs to completion even if the handle is dropped.
    pub fn dispatch(&self, payload: SyncPayload) -> JoinHandle<DeliveryOutcome> {
        let engine = Arc::clone(&self.engine);
        let span = info_span!("contact_delivery", sync_id = %Uuid::new_v4());

        tokio::spawn(
            async move {
                let outcome = engine.deliver(&payload).await;
                info!(outcome = outcome.label(), attempts = outcome.attempts(), "delivery finished");
                outcome
            }
            .instrument(span),
        )
    }
}
