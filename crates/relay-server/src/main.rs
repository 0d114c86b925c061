//! HTTP server entry point.
//!
//! Reads configuration from the environment, builds the relay router,
//! and serves it on the configured port.

use std::sync::Arc;

use anyhow::Result;
use relay_config::Config;
use relay_server::{app, ServerState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .compact()
        .init();

    let config = Config::from_env()?;
    if !config.has_api_key() {
        tracing::warn!("RETELL_API_KEY is not set; upstream calls will be rejected");
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let state = Arc::new(ServerState::new(config));
    let router = app(state)?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
