//! HTTP server initialization and runtime setup.
//!
//! Wires the in-memory stores, the clock, the log forwarder and the access
//! log into [`AppState`], then serves the router.

use crate::application::services::ShortUrlService;
use crate::config::Config;
use crate::domain::clock::SystemClock;
use crate::infrastructure::access_log::AccessLog;
use crate::infrastructure::remote_log::{Level, LogForwarder, Package, Stack};
use crate::infrastructure::storage::{InMemoryClickRepository, InMemoryShortUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client for the collector cannot be built or
/// the access log file cannot be opened.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let service = ShortUrlService::new(
        Arc::new(InMemoryShortUrlRepository::new()),
        Arc::new(InMemoryClickRepository::new()),
        Arc::new(SystemClock),
    )
    .with_max_alias_attempts(config.max_alias_attempts);

    let remote_log = LogForwarder::new(
        config.log_collector_url.clone(),
        config.log_collector_token.clone(),
        Duration::from_secs(config.log_collector_timeout_secs),
    )
    .context("Failed to build log collector client")?;

    let mut state = AppState::new(Arc::new(service), remote_log, &config.base_url)
        .with_default_validity(config.default_validity_minutes);

    if let Some(path) = &config.access_log_path {
        let access_log = AccessLog::open(path)
            .await
            .with_context(|| format!("Failed to open access log {}", path))?;
        tracing::info!("Access log: {}", access_log.path().display());
        state = state.with_access_log(Arc::new(access_log));
    }

    Ok(state)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - State construction fails
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let remote_log = state.remote_log.clone();

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{addr}");

    remote_log.spawn(
        Stack::Backend,
        Level::Info,
        Package::Service,
        format!("Server listening on {}", addr),
    );

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
