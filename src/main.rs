mod analytics;
mod config;
mod error;
mod pexels;
mod routes;
mod server;
mod state;

use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};

use config::{CliArgs, RelayConfig};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pexels_relay=info,tower_http=info".into()),
        )
        .init();

    let args = CliArgs::parse();
    info!("Starting pexels-relay v{}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", args.environment);
    info!("Upstream: {}", args.base_url);

    let config = RelayConfig::from_args(args);
    if !config.has_api_key() {
        warn!("PEXELS_API_KEY is not set; upstream calls will be rejected");
    }
    let port = config.port;

    let state = Arc::new(AppState::new(config)?);

    let router = server::build_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Relay listening on http://0.0.0.0:{}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Relay shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
