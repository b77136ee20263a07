//! Inbound sync request

use serde::{Deserialize, Serialize};

use super::contact::CustomerIds;

/// Body of `POST /sync-is-nusacontact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncContactRequest {
    /// Group contact phone number
    pub contact_number: String,
    /// One id, comma-separated ids, or an array of ids
    pub customer_id: CustomerIds,
    pub contact_name: String,
}
