//! # ContactSync Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - MySQL access to the ISX customer datastore (sqlx)
//! - HTTP client plumbing (reqwest)
//! - The NusaContact contact API integration
//! - Configuration loading and tracing setup
//!
//! ## Architecture
//! - Implements traits defined in `contactsync-core`
//! - Depends on `contactsync-domain` and `contactsync-core`
//! - Contains all "impure" code (I/O, environment, network)

pub mod config;
pub mod database;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;

// Re-export commonly used items
pub use database::{create_pool, MySqlContactRepository};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::nusacontact::NusacontactClient;
