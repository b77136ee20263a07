//! Delivery of contact payloads to NusaContact
//!
//! The engine owns the retry loop; the policy decides what a status means and
//! how long to wait; the gateway port performs a single POST.

pub mod engine;
pub mod policy;
pub mod ports;
