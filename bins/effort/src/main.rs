//! Tallyboard effort calculator.
//!
//! Serves the dashboard API. Analysis works without a configured key when the
//! caller supplies one per request.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tallyboard_api::{AppState, create_router};
use tallyboard_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tallyboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    if config.analysis.credential().is_none() {
        warn!("No analysis key configured; analysis needs a per-request api_key");
    } else {
        info!(model = %config.analysis.model, "Analysis enabled");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Effort calculator listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
