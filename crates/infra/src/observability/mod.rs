//! Observability infrastructure
//!
//! Process-wide `tracing` subscriber setup. Everything else in the
//! workspace only emits events through the `tracing` macros.

pub mod logging;

pub use logging::{init_tracing, LogFormat};
