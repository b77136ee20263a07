//! # ContactSync Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Contact resolution and payload formatting
//! - The retrying delivery engine and its backoff policy
//! - Port interfaces (traits) for the datastore and the NusaContact API
//! - The sync service tying resolution to delivery
//!
//! ## Architecture Principles
//! - Only depends on `contactsync-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod contact;
pub mod delivery;
pub mod sync;

// Re-export specific items to avoid ambiguity
pub use contact::formatter::format_contact;
pub use contact::ports::ContactRepository;
pub use contact::resolver::ContactResolver;
pub use delivery::engine::DeliveryEngine;
pub use delivery::policy::{RetryPolicy, StatusClass};
pub use delivery::ports::{ContactGateway, GatewayResponse};
pub use sync::service::ContactSyncService;
