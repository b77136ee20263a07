//! NusaContact contact API integration
//!
//! `NusacontactClient` implements the core `ContactGateway` port: it posts a
//! formatted contact payload to the configured endpoint and reports the raw
//! status and body back to the delivery engine.
//!
//! # Error Handling
//!
//! - **Any HTTP status**: returned as a `GatewayResponse`; the engine decides
//!   whether to retry
//! - **Timeouts and connection failures**: returned as `Network` errors, which
//!   the engine does not retry

pub mod client;

pub use client::NusacontactClient;
