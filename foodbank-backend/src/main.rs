//! Foodbank Backend Server
//!
//! Entry point: configuration loading, tracing setup and HTTP server startup.

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;

mod cli;
mod config_helpers;
mod tracing_setup;

use cli::CliArgs;
use config_helpers::resolve_bind_address;
use tracing_setup::install_tracing_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    eprintln!("[STARTUP] Loading config from: {:?}", args.config_path);
    let config = foodbank_config::load_config(args.config_path.as_deref())
        .context("failed to load configuration")?;
    foodbank_config::validate_config(&config).context("invalid configuration")?;

    install_tracing_from_config(&config.logging)?;
    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        body_limit = config.http.body_limit,
        log_json = config.logging.json,
        "configuration loaded"
    );

    let app = foodbank_backend::build_router(&config.http);

    let addr = resolve_bind_address(&config.server.host, config.server.port).await?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(%e, "failed to listen for Ctrl+C");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    tracing::info!("received Ctrl+C, initiating graceful shutdown");
}
