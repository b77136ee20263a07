//! `POST /sync-is-nusacontact`

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use contactsync_core::ContactSyncService;
use contactsync_domain::SyncContactRequest;
use tracing::{info, instrument};

use crate::error::{ApiError, MessageResponse, CONTACT_CREATED_MESSAGE};

/// Resolve the contact, start delivery in the background and acknowledge.
///
/// The 200 response does not wait for NusaContact; delivery outcomes are
/// only visible in the logs.
#[instrument(skip_all)]
pub async fn sync_contact(
    State(service): State<Arc<ContactSyncService>>,
    body: Result<Json<SyncContactRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let payload = service.prepare_payload(&request).await?.ok_or(ApiError::NotFound)?;

    info!(
        phone_number = %payload.phone_number,
        branch_code = %payload.branch_code,
        "Contact resolved, starting delivery"
    );
    // Detached; the task outlives this request.
    drop(service.dispatch(payload));

    Ok(Json(MessageResponse::ok(CONTACT_CREATED_MESSAGE)))
}
