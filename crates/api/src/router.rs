//! Sync API router configuration.
//!
//! Configures routes for the sync endpoint:
//! - POST /sync-is-nusacontact - Resolve an ISX contact and push it to NusaContact

use std::sync::Arc;

use axum::routing::post;
use axum::Router;
use contactsync_core::ContactSyncService;

use crate::handlers::sync_contact;

/// Route of the contact sync endpoint.
pub const SYNC_CONTACT_PATH: &str = "/sync-is-nusacontact";

/// Build the router serving the sync endpoint.
pub fn sync_router(service: Arc<ContactSyncService>) -> Router {
    Router::new().route(SYNC_CONTACT_PATH, post(sync_contact)).with_state(service)
}
