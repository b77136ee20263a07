//! MySQL connection pool for the ISX datastore.

use contactsync_domain::DatabaseConfig;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

/// Build the shared pool from `config`.
///
/// Connections are opened on first use, so startup succeeds even while the
/// datastore is unreachable. Callers queue behind an exhausted pool for up to
/// `acquire_timeout`; sqlx keeps retrying refused connects inside that same
/// window, after which `acquire()` fails with `PoolTimedOut`.
pub fn create_pool(config: &DatabaseConfig) -> MySqlPool {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name);

    let pool = MySqlPoolOptions::new()
        .max_connections(config.pool_size.max(1))
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(options);

    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        max_connections = config.pool_size.max(1),
        acquire_timeout_ms = config.acquire_timeout_ms,
        "mysql pool initialised"
    );

    pool
}
