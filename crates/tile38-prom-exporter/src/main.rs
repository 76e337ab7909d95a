//! tile38-prometheus
//!
//! Polls a Tile38 server with `SERVER EXT` on every scrape and serves the
//! result as Prometheus text on `/metrics`.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tile38_prom_core::error::{ExporterError, Result};
use tile38_prom_exporter::{app_state, cli::Cli, router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    if let Err(err) = run(Cli::parse()).await {
        tracing::error!(kind = err.kind().as_str(), error = %err, "fatal exporter error");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = cli.resolve()?;
    let listen = cfg.http.listen_addr()?;

    let state = app_state::AppState::new(&cfg)?;
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ExporterError::Internal(format!("bind {listen} failed: {e}")))?;

    tracing::info!(%listen, "server started");
    tracing::info!(backend = %cfg.backend.addr, namespace = %cfg.metrics.namespace, "pointing to Tile38 server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ExporterError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "ctrl_c listener error");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
