//! # ContactSync Domain
//!
//! Business domain types and models for the ISX → NusaContact sync service.
//!
//! This crate contains:
//! - Contact data types (aggregate, raw records, outbound payload)
//! - Delivery outcome types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (link templates, timezones, defaults)
//!
//! ## Architecture
//! - No dependencies on other ContactSync crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
