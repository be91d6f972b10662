//! tabular-server — dashboard UI, canned data endpoints and a mock upload
//! pipeline backed by a hand-rolled multipart decoder.
//!
//! Usage:
//!   tabular-server --port 5000 --static-dir apps/tabular-dashboard/static

mod assets;
mod config;
mod error;
mod mock;
mod server;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::Config;
use crate::mock::MockData;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = Config::parse();

    std::fs::create_dir_all(&cfg.upload_dir)
        .with_context(|| format!("failed to create upload dir {}", cfg.upload_dir.display()))?;

    let state = Arc::new(server::AppState::from_config(&cfg, MockData::new()));
    let app = server::router(state, cfg.max_upload_bytes);

    let addr = cfg.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!("listening on http://localhost:{}", cfg.port);
    info!(
        templates = %cfg.templates_dir.display(),
        static_dir = %cfg.static_dir.display(),
        uploads = %cfg.upload_dir.display(),
        "serving"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
