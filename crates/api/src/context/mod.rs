//! Application context - dependency injection container

use std::sync::Arc;

use axum::Router;
use contactsync_core::{ContactResolver, ContactSyncService, DeliveryEngine, RetryPolicy};
use contactsync_domain::{Config, Result};
use contactsync_infra::{create_pool, MySqlContactRepository, NusacontactClient};
use sqlx::MySqlPool;
use tracing::info;

use crate::router::sync_router;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub pool: MySqlPool,
    pub sync_service: Arc<ContactSyncService>,
}

impl AppContext {
    /// Wire the datastore, the NusaContact client and the sync service.
    ///
    /// Must run inside a tokio runtime. No connection is opened until the
    /// first request needs one.
    ///
    /// # Errors
    /// Fails if the HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let pool = create_pool(&config.database);
        let repository = Arc::new(MySqlContactRepository::new(pool.clone()));

        let gateway = Arc::new(NusacontactClient::from_config(&config.nusacontact)?);
        let policy = RetryPolicy::from_config(&config.nusacontact);
        let engine = Arc::new(DeliveryEngine::new(gateway, policy));

        let sync_service =
            Arc::new(ContactSyncService::new(ContactResolver::new(repository), engine));

        info!(
            api_url = %config.nusacontact.api_url,
            max_attempts = config.nusacontact.max_attempts,
            base_delay_ms = config.nusacontact.base_delay_ms,
            "Application context initialized"
        );

        Ok(Self { config, pool, sync_service })
    }

    /// Router for the configured service.
    pub fn router(&self) -> Router {
        sync_router(Arc::clone(&self.sync_service))
    }

    /// Close the datastore pool, waiting for checked-out connections.
    pub async fn shutdown(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}
