//! Contact resolver - builds a [`ContactAggregate`] from ISX rows

use std::sync::Arc;

use contactsync_domain::{
    ContactAggregate, ContactRecords, CustomerIds, LinkedEntry, Result,
};
use tracing::{debug, instrument};

use super::ports::ContactRepository;

/// Resolves customer ids into a contact aggregate
pub struct ContactResolver {
    repository: Arc<dyn ContactRepository>,
}

impl ContactResolver {
    /// Resolver reading rows from `repository`.
    pub fn new(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Look up the contact for `customer_ids`.
    ///
    /// Returns `Ok(None)` when no id survives normalization or no customer
    /// row matches; subscription rows alone never produce a contact.
    ///
    /// # Errors
    ///
    /// Propagates datastore failures from the repository.
    #[instrument(skip_all)]
    pub async fn resolve(&self, customer_ids: &CustomerIds) -> Result<Option<ContactAggregate>> {
        let ids = customer_ids.normalize();
        if ids.is_empty() {
            debug!("no customer ids after normalization");
            return Ok(None);
        }

        let records = self.repository.fetch_contact_records(&ids).await?;
        if records.customers.is_empty() {
            debug!(requested = ids.len(), "no customer rows matched");
            return Ok(None);
        }

        debug!(
            customers = records.customers.len(),
            subscriptions = records.subscriptions.len(),
            "customer rows matched"
        );
        Ok(Some(build_aggregate(ids, records)))
    }
}

/// Fold raw rows into an aggregate.
///
/// `ids` is taken as-is; callers are expected to pass normalized ids.
pub fn build_aggregate(ids: Vec<String>, records: ContactRecords) -> ContactAggregate {
    let mut contact = ContactAggregate { ids, ..ContactAggregate::default() };

    for customer in records.customers {
        let company = customer.company.as_deref().map(str::trim).unwrap_or_default();
        if !company.is_empty() {
            contact.companies.push(LinkedEntry::new(customer.customer_id.as_str(), company));
        }
        if let Some(branch) = customer.branch {
            if !contact.branches.contains(&branch) {
                contact.branches.push(branch);
            }
        }
    }

    for subscription in records.subscriptions {
        let address = normalize_address(subscription.address.as_deref().unwrap_or_default());
        if !address.is_empty() {
            contact.addresses.push(LinkedEntry::new(subscription.subscription_id.as_str(), address));
        }
        contact.services.push(LinkedEntry::new(
            subscription.subscription_id.as_str(),
            subscription.service.unwrap_or_default(),
        ));
        contact.accounts.push(LinkedEntry::new(
            subscription.subscription_id,
            subscription.account.as_deref().map(str::trim).unwrap_or_default(),
        ));
    }

    contact
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn normalize_address(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
