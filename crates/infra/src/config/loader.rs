//! Configuration loader
//!
//! Loads application configuration from a file or environment variables.
//!
//! ## Loading Strategy
//! 1. If `CONTACTSYNC_CONFIG` names a file, the config is parsed from it
//! 2. Otherwise every setting is read from its environment variable
//! 3. Missing settings take the defaults from `contactsync-domain`
//! 4. The result is validated before it is returned
//!
//! ## Environment Variables
//! - `HOST`, `PORT`: listener address
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: MySQL
//!   connection
//! - `DB_POOL`: connection pool size
//! - `DB_ACQUIRE_TIMEOUT_MS`: longest wait for a pooled connection
//! - `NUSACONTACT_SYNC_CONTACT_API_URL`: contact endpoint
//! - `NUSACONTACT_API_KEY`: value of the `X-Api-Key` header
//! - `NUSACONTACT_SYNC_CONTACT_MAX_ATTEMPTS`: delivery attempt budget
//! - `NUSACONTACT_SYNC_CONTACT_BASE_DELAY_MS`: first backoff delay
//! - `NUSACONTACT_SYNC_CONTACT_JITTER_MS`: jitter ceiling per retry
//! - `NUSACONTACT_SYNC_CONTACT_TIMEOUT_MS`: per-attempt request timeout

use std::path::{Path, PathBuf};
use std::str::FromStr;

use contactsync_domain::{Config, ContactSyncError, Result};
use url::Url;

/// Names a `.toml` or `.json` config file that replaces environment lookup.
pub const CONFIG_PATH_ENV: &str = "CONTACTSYNC_CONFIG";

/// Load configuration for the running process.
///
/// # Errors
/// Returns `ContactSyncError::Config` if the named file cannot be read or
/// parsed, a variable holds an unparseable value, or validation fails.
pub fn load() -> Result<Config> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            let config = load_from_file(PathBuf::from(path.trim()))?;
            tracing::info!(path = %path.trim(), "Configuration loaded from file");
            Ok(config)
        }
        _ => {
            let config = load_from_env()?;
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
    }
}

/// Load configuration from the process environment.
///
/// # Errors
/// See [`load_from_lookup`].
pub fn load_from_env() -> Result<Config> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load configuration through `lookup`, which maps a variable name to its
/// value.
///
/// Unset variables keep their defaults. Set but empty numeric variables are
/// treated as unset.
///
/// # Errors
/// Returns `ContactSyncError::Config` when a value fails to parse or the
/// assembled config is invalid.
pub fn load_from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(host) = lookup("HOST") {
        config.server.host = host;
    }
    parse_into(&lookup, "PORT", &mut config.server.port)?;

    let database = &mut config.database;
    if let Some(host) = lookup("DB_HOST") {
        database.host = host;
    }
    parse_into(&lookup, "DB_PORT", &mut database.port)?;
    if let Some(user) = lookup("DB_USER") {
        database.user = user;
    }
    if let Some(password) = lookup("DB_PASSWORD") {
        database.password = password;
    }
    if let Some(name) = lookup("DB_NAME") {
        database.name = name;
    }
    parse_into(&lookup, "DB_POOL", &mut database.pool_size)?;
    parse_into(&lookup, "DB_ACQUIRE_TIMEOUT_MS", &mut database.acquire_timeout_ms)?;

    let nusacontact = &mut config.nusacontact;
    if let Some(api_url) = lookup("NUSACONTACT_SYNC_CONTACT_API_URL") {
        nusacontact.api_url = api_url;
    }
    if let Some(api_key) = lookup("NUSACONTACT_API_KEY") {
        nusacontact.api_key = api_key;
    }
    parse_into(&lookup, "NUSACONTACT_SYNC_CONTACT_MAX_ATTEMPTS", &mut nusacontact.max_attempts)?;
    parse_into(&lookup, "NUSACONTACT_SYNC_CONTACT_BASE_DELAY_MS", &mut nusacontact.base_delay_ms)?;
    parse_into(&lookup, "NUSACONTACT_SYNC_CONTACT_JITTER_MS", &mut nusacontact.jitter_ms)?;
    parse_into(&lookup, "NUSACONTACT_SYNC_CONTACT_TIMEOUT_MS", &mut nusacontact.timeout_ms)?;

    finish(config)
}

/// Load configuration from a file
///
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `ContactSyncError::Config` if:
/// - File not found or unreadable
/// - File format is invalid or unsupported
/// - The parsed config fails validation
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ContactSyncError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ContactSyncError::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    finish(parse_config(&content, path)?)
}

/// Parse config content based on file extension
fn parse_config(content: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "json" => serde_json::from_str(content)
            .map_err(|e| ContactSyncError::Config(format!("Invalid JSON config: {}", e))),
        "toml" => toml::from_str(content)
            .map_err(|e| ContactSyncError::Config(format!("Invalid TOML config: {}", e))),
        _ => Err(ContactSyncError::Config(format!(
            "Unsupported config format: {} (expected .json or .toml)",
            extension
        ))),
    }
}

fn finish(config: Config) -> Result<Config> {
    config.validate()?;
    Url::parse(&config.nusacontact.api_url).map_err(|e| {
        ContactSyncError::Config(format!(
            "Invalid NusaContact API URL '{}': {}",
            config.nusacontact.api_url, e
        ))
    })?;
    Ok(config)
}

/// Overwrite `target` with the parsed value of `key` when it is set.
fn parse_into<F, T>(lookup: &F, key: &str, target: &mut T) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }
    *target = raw
        .parse()
        .map_err(|e| ContactSyncError::Config(format!("Invalid value for {key}: {e}")))?;
    Ok(())
}
