//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ContactSync
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ContactSyncError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContactSyncError {
    /// Stable label suitable for structured log fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Database(_) => "database",
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for ContactSync operations
pub type Result<T> = std::result::Result<T, ContactSyncError>;
