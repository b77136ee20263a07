//! Contact formatter - shapes an aggregate into the NusaContact payload

use chrono_tz::Tz;
use contactsync_domain::constants::{
    CUSTOMER_LINK_PREFIX, CUSTOMER_LINK_SUFFIX, LIST_SEPARATOR, MAKASSAR_BRANCH_CODE,
    SUBSCRIPTION_LINK_PREFIX, SUBSCRIPTION_LINK_SUFFIX,
};
use contactsync_domain::{ContactAggregate, ContactAttributes, LinkedEntry, SyncPayload};

const MAKASSAR_TIMEZONE: Tz = chrono_tz::Asia::Makassar;
const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

/// ISX page a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkTarget {
    CustomerProfile,
    SubscriptionDetail,
}

impl LinkTarget {
    fn render(self, label: &str, id: &str) -> String {
        let (prefix, suffix) = match self {
            Self::CustomerProfile => (CUSTOMER_LINK_PREFIX, CUSTOMER_LINK_SUFFIX),
            Self::SubscriptionDetail => (SUBSCRIPTION_LINK_PREFIX, SUBSCRIPTION_LINK_SUFFIX),
        };
        format!("[{label}]({prefix}{id}{suffix})")
    }
}

/// Build the payload for `contact_number`. Same input, same bytes.
pub fn format_contact(
    contact_number: &str,
    contact: &ContactAggregate,
    contact_name: &str,
) -> SyncPayload {
    let attributes = ContactAttributes {
        ids: contact
            .ids
            .iter()
            .map(|id| LinkTarget::CustomerProfile.render(id, id))
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        companies: join_links(&contact.companies, LinkTarget::CustomerProfile),
        services: non_empty_links(&contact.services, LinkTarget::SubscriptionDetail),
        accounts: non_empty_links(&contact.accounts, LinkTarget::SubscriptionDetail),
        addresses: non_empty_links(&contact.addresses, LinkTarget::SubscriptionDetail),
    };

    SyncPayload {
        phone_number: contact_number.to_string(),
        name: contact_name.to_string(),
        timezone: timezone_for(&contact.branches).name().to_string(),
        branch_code: contact.branches.join(LIST_SEPARATOR),
        // A struct of plain strings always serializes
        attributes: serde_json::to_string(&attributes).unwrap_or_default(),
    }
}

/// Contacts served by the Makassar branch get central Indonesian time.
pub fn timezone_for(branches: &[String]) -> Tz {
    if branches.iter().any(|branch| branch == MAKASSAR_BRANCH_CODE) {
        MAKASSAR_TIMEZONE
    } else {
        DEFAULT_TIMEZONE
    }
}

fn join_links(entries: &[LinkedEntry], target: LinkTarget) -> String {
    entries
        .iter()
        .map(|entry| target.render(&entry.name, &entry.id))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn non_empty_links(entries: &[LinkedEntry], target: LinkTarget) -> Option<String> {
    (!entries.is_empty()).then(|| join_links(entries, target))
}
