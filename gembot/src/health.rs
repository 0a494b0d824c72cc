//! Liveness endpoint for hosting platforms that expect an open port.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

async fn root() -> &'static str {
    "Bot is running!"
}

async fn health() -> &'static str {
    "OK"
}

/// `/` and `/_health`, each answering GET, HEAD and POST.
pub fn health_router() -> Router {
    Router::new()
        .route("/", get(root).head(root).post(root))
        .route("/_health", get(health).head(health).post(health))
}

/// Binds `0.0.0.0:port` and serves [`health_router`] until the task is dropped.
pub async fn serve_health(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind health server to {}", addr))?;
    info!(addr = %addr, "Health server listening");

    axum::serve(listener, health_router())
        .await
        .context("Health server stopped")
}
