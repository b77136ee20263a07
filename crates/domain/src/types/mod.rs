//! Domain types and models

pub mod contact;
pub mod delivery;
pub mod payload;
pub mod request;

// Re-export for convenience
pub use contact::{
    ContactAggregate, ContactRecords, CustomerIds, CustomerRecord, LinkedEntry, SubscriptionRecord,
};
pub use delivery::DeliveryOutcome;
pub use payload::{ContactAttributes, SyncPayload};
pub use request::SyncContactRequest;
