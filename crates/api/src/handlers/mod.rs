//! Request handlers

pub mod sync;

pub use sync::sync_contact;
