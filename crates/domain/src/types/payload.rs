//! NusaContact contact payload

use serde::{Deserialize, Serialize};

/// Free-form contact attributes.
///
/// Serialized to a JSON string and embedded in [`SyncPayload::attributes`].
/// Absent lists are skipped rather than written as `null`, and field order
/// fixes the key order of the encoded string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAttributes {
    pub ids: String,
    pub companies: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addresses: Option<String>,
}

/// Body POSTed to the NusaContact contacts endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPayload {
    pub phone_number: String,
    pub name: String,
    pub timezone: String,
    pub branch_code: String,
    /// JSON-encoded [`ContactAttributes`]
    pub attributes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_lists_are_omitted() {
        let attributes = ContactAttributes {
            ids: "a".into(),
            companies: String::new(),
            services: None,
            accounts: Some("b".into()),
            addresses: None,
        };

        let json = serde_json::to_string(&attributes).unwrap();
        assert_eq!(json, r#"{"ids":"a","companies":"","accounts":"b"}"#);
    }
}
