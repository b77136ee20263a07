//! Configuration loading
//!
//! Builds the domain [`Config`](contactsync_domain::Config) from a config
//! file or from environment variables.

pub mod loader;

// Re-export commonly used items
pub use loader::{load, load_from_env, load_from_file, load_from_lookup, CONFIG_PATH_ENV};
