//! HTTP server bootstrap

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers::{connectivity_status, get_monkey, health, list_monkeys, AppState};
use crate::domain::models::ServerConfig;

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/monkeys", get(list_monkeys))
        .route("/api/monkeys/:name", get(get_monkey))
        .route("/api/connectivity", get(connectivity_status))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;
    Ok(())
}

/// Bind the configured address and serve until Ctrl-C
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(addr = %addr, "monkey API listening");

    serve(listener, state, shutdown_signal()).await?;

    info!("monkey API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
