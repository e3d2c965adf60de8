//! HTTP server initialization and runtime setup.
//!
//! Handles store connection, settings seeding, probe client setup, and Axum
//! server lifecycle.

use crate::application::services::SettingsService;
use crate::config::Config;
use crate::infrastructure::probe::HttpProber;
use crate::infrastructure::store::connect_with_retry;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Store connection with retry (migrations for PostgreSQL)
/// - Production URL seed from `PRODUCTION_BASE_URL` if none is stored
/// - HTTP existence prober
/// - Configuration gate
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The store stays unreachable after all retries
/// - Settings cannot be read
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_with_retry(&config.store)
        .await
        .context("Failed to connect to store")?;

    let settings = SettingsService::new(store.settings.clone(), config.local_base_url.clone());

    if let Some(ref seed) = config.production_base_url
        && settings.seed_production_url(seed).await?
    {
        tracing::info!("Seeded production URL from PRODUCTION_BASE_URL");
    }

    let configuration = settings.load().await?;

    let prober = HttpProber::new(
        config.probe.timeout(),
        config.probe.connect_timeout(),
        config.probe.method,
    )?;

    let state = AppState::new(store, Arc::new(prober), configuration, &config.admin_token)
        .with_resolve_deadline(config.probe.batch_deadline());

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Completes on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
