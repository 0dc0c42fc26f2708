//! # Fishlog Binary
//!
//! The entry point that assembles the demo backend: in-memory stores, the
//! stub detector, and the axum router from api-adapters.

use std::sync::Arc;

use anyhow::Context;
use api_adapters::AppState;
use detect_adapters::StubDetector;
use services::{AuthService, DetectionService, LogbookService};
use storage_adapters::{InMemoryCaptureLog, InMemoryUserStore};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = configs::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cfg.log.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Storage: process-lifetime only; a restart starts from empty.
    let users = Arc::new(InMemoryUserStore::new());
    let captures = Arc::new(InMemoryCaptureLog::new());

    // 2. Detection: the stub stands in until a real model server exists.
    let detector = Arc::new(StubDetector::new());

    // 3. Services wired into the shared handler state.
    let state = AppState::new(
        Arc::new(AuthService::new(users)),
        Arc::new(LogbookService::new(captures)),
        Arc::new(DetectionService::new(detector)),
    );
    let app = api_adapters::router(state);

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %listener.local_addr()?, "fishlog listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(%err, "failed to install ctrl-c handler");
        return;
    }
    info!("shutdown signal received");
}
