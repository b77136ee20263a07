//! ContactSync - ISX to NusaContact contact sync service
//!
//! Main entry point for the HTTP server.

use anyhow::Context;
use contactsync_api::AppContext;
use contactsync_infra::config;
use contactsync_infra::observability::{init_tracing, LogFormat};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading LOG_FORMAT / RUST_LOG
    let dotenv = dotenvy::dotenv();
    init_tracing(LogFormat::from_env());

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) if err.not_found() => info!("No .env file found, using process environment"),
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    let config = config::load().context("failed to load configuration")?;
    let context = AppContext::new(config).context("failed to initialize application")?;

    let address = context.config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind to address {address}"))?;
    info!(%address, "Server listening");

    axum::serve(listener, context.router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    context.shutdown().await;
    info!("Shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
