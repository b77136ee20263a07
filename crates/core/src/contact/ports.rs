//! Port interfaces for contact lookups

use async_trait::async_trait;
use contactsync_domain::{ContactRecords, Result};

/// Read-only access to ISX customer and subscription rows
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Fetch customer rows for `customer_ids` and, when at least one matched,
    /// their active (non-canceled) subscriptions.
    ///
    /// Implementations must bind every id as a query parameter and release
    /// any connection they acquire before returning.
    async fn fetch_contact_records(&self, customer_ids: &[String]) -> Result<ContactRecords>;
}
