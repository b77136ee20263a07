//! Configuration structures
//!
//! Every field has a documented default so a bare environment still yields a
//! runnable configuration. Loading lives in `contactsync-infra::config`.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DB_ACQUIRE_TIMEOUT_MS, DEFAULT_DB_HOST, DEFAULT_DB_NAME, DEFAULT_DB_POOL_SIZE,
    DEFAULT_DB_PORT, DEFAULT_DB_USER, DEFAULT_HOST, DEFAULT_NUSACONTACT_API_URL, DEFAULT_PORT,
    DEFAULT_SYNC_BASE_DELAY_MS, DEFAULT_SYNC_JITTER_MS, DEFAULT_SYNC_MAX_ATTEMPTS,
    DEFAULT_SYNC_TIMEOUT_MS,
};
use crate::errors::{ContactSyncError, Result};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub nusacontact: NusacontactConfig,
}

impl Config {
    /// Reject values that would make the service unusable.
    pub fn validate(&self) -> Result<()> {
        if self.database.pool_size == 0 {
            return Err(ContactSyncError::Config("database pool size must be at least 1".into()));
        }
        if self.database.acquire_timeout_ms == 0 {
            return Err(ContactSyncError::Config(
                "database acquire timeout must be at least 1ms".into(),
            ));
        }
        if self.nusacontact.max_attempts == 0 {
            return Err(ContactSyncError::Config(
                "NusaContact max sync attempts must be at least 1".into(),
            ));
        }
        if self.nusacontact.api_url.trim().is_empty() {
            return Err(ContactSyncError::Config("NusaContact API URL must not be empty".into()));
        }
        Ok(())
    }
}

/// Inbound HTTP listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// `host:port` string accepted by `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// ISX MySQL datastore
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Maximum number of pooled connections; requests queue beyond this.
    pub pool_size: u32,
    /// Longest wait for a pooled connection, including reconnects to a
    /// datastore that refuses them.
    pub acquire_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            user: DEFAULT_DB_USER.to_string(),
            password: String::new(),
            name: DEFAULT_DB_NAME.to_string(),
            pool_size: DEFAULT_DB_POOL_SIZE,
            acquire_timeout_ms: DEFAULT_DB_ACQUIRE_TIMEOUT_MS,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("pool_size", &self.pool_size)
            .field("acquire_timeout_ms", &self.acquire_timeout_ms)
            .finish()
    }
}

impl DatabaseConfig {
    /// Bound on `pool.acquire()`; a dead datastore fails after this long.
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_millis(self.acquire_timeout_ms)
    }
}

/// NusaContact contact API and delivery retry budget
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NusacontactConfig {
    pub api_url: String,
    pub api_key: String,
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub jitter_ms: u64,
    pub timeout_ms: u64,
}

impl Default for NusacontactConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_NUSACONTACT_API_URL.to_string(),
            api_key: String::new(),
            max_attempts: DEFAULT_SYNC_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_SYNC_BASE_DELAY_MS,
            jitter_ms: DEFAULT_SYNC_JITTER_MS,
            timeout_ms: DEFAULT_SYNC_TIMEOUT_MS,
        }
    }
}

impl NusacontactConfig {
    /// Delay before the first retry; doubles on each later one.
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    /// Upper bound (exclusive) of the random delay added to each backoff.
    pub fn jitter(&self) -> Duration {
        Duration::from_millis(self.jitter_ms)
    }

    /// Per-attempt request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl fmt::Debug for NusacontactConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NusacontactConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("max_attempts", &self.max_attempts)
            .field("base_delay_ms", &self.base_delay_ms)
            .field("jitter_ms", &self.jitter_ms)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
