//! Tracing subscriber setup

use std::str::FromStr;

use contactsync_domain::ContactSyncError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt layer, selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for local runs.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT`, falling back to [`LogFormat::Pretty`].
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT").ok().and_then(|raw| raw.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for LogFormat {
    type Err = ContactSyncError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ContactSyncError::Config(format!("unknown log format: {other}"))),
        }
    }
}

/// Install the global subscriber.
///
/// Calling this twice is harmless: the second install fails quietly and the
/// first subscriber stays active.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
        LogFormat::Json => {
            registry.with(fmt::layer().json().with_current_span(true).flatten_event(true)).try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
