//! # ContactSync API
//!
//! HTTP application layer - routes, handlers and the main entry point.
//!
//! This crate contains:
//! - The axum router and its request handlers
//! - Application context (dependency injection)
//! - Mapping of domain errors onto HTTP responses
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Exposes `POST /sync-is-nusacontact`

pub mod context;
pub mod error;
pub mod handlers;
pub mod router;

// Re-export for convenience
pub use context::AppContext;
pub use error::{ApiError, MessageResponse};
pub use router::{sync_router, SYNC_CONTACT_PATH};
