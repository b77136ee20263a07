//! Contact lookup types
//!
//! Raw datastore records and the denormalized aggregate built from them.

use serde::{Deserialize, Serialize};

use crate::constants::CUSTOMER_ID_DELIMITER;

/// Customer identifiers as supplied by callers.
///
/// A single string may carry several ids separated by commas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerIds {
    /// One string, possibly comma-separated.
    Joined(String),
    /// One id per element.
    List(Vec<String>),
}

impl CustomerIds {
    /// Split, trim, and drop empty parts while keeping input order.
    ///
    /// Empty parts are dropped on purpose: `"C1,,C2"` yields `[C1, C2]`, so
    /// a stray comma never binds an empty id or renders an empty link.
    pub fn normalize(&self) -> Vec<String> {
        match self {
            Self::Joined(raw) => collect_trimmed(raw.split(CUSTOMER_ID_DELIMITER)),
            Self::List(ids) => collect_trimmed(ids.iter().map(String::as_str)),
        }
    }
}

fn collect_trimmed<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts.map(str::trim).filter(|part| !part.is_empty()).map(str::to_string).collect()
}

impl From<&str> for CustomerIds {
    fn from(value: &str) -> Self {
        Self::Joined(value.to_string())
    }
}

impl From<String> for CustomerIds {
    fn from(value: String) -> Self {
        Self::Joined(value)
    }
}

impl From<Vec<String>> for CustomerIds {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// An id/label pair rendered as a deep link in contact attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedEntry {
    pub id: String,
    pub name: String,
}

impl LinkedEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// Denormalized customer/service/account/address facts for one contact.
///
/// `ids` is never empty for an aggregate handed out by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAggregate {
    pub ids: Vec<String>,
    /// Effective branch codes, deduplicated in first-seen order
    pub branches: Vec<String>,
    pub companies: Vec<LinkedEntry>,
    pub services: Vec<LinkedEntry>,
    pub accounts: Vec<LinkedEntry>,
    pub addresses: Vec<LinkedEntry>,
}

/// Row from the `Customer` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: String,
    pub company: Option<String>,
    /// Display branch when set, otherwise the primary branch
    pub branch: Option<String>,
}

/// Active row from `CustomerServices` joined with its service type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub subscription_id: String,
    pub service: Option<String>,
    pub account: Option<String>,
    pub address: Option<String>,
}

/// Both lookups for one set of customer ids.
///
/// `subscriptions` is left empty when `customers` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecords {
    pub customers: Vec<CustomerRecord>,
    pub subscriptions: Vec<SubscriptionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_ids_are_split_and_trimmed() {
        let ids = CustomerIds::from(" C001, C002 ,C003 ");
        assert_eq!(ids.normalize(), vec!["C001", "C002", "C003"]);
    }

    #[test]
    fn empty_segments_are_dropped() {
        assert!(CustomerIds::from("").normalize().is_empty());
        assert!(CustomerIds::from(" , ,").normalize().is_empty());
        assert_eq!(CustomerIds::from("C001,,C002").normalize(), vec!["C001", "C002"]);
    }

    #[test]
    fn list_form_keeps_order() {
        let ids = CustomerIds::from(vec!["B".to_string(), " A ".to_string()]);
        assert_eq!(ids.normalize(), vec!["B", "A"]);
    }

    #[test]
    fn deserializes_string_or_array() {
        let joined: CustomerIds = serde_json::from_str(r#""C1,C2""#).unwrap();
        let list: CustomerIds = serde_json::from_str(r#"["C1","C2"]"#).unwrap();
        assert_eq!(joined.normalize(), list.normalize());
    }
}
