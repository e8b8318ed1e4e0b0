//! Tallyboard finance tracker.
//!
//! Serves the dashboard API. Refuses to start without an analysis key.

use anyhow::{Context, bail};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tallyboard_api::{AppState, create_router};
use tallyboard_shared::AppConfig;
use tallyboard_shared::config::GEMINI_API_KEY_ENV;

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
        error!(
            "Missing analysis key: set {} or TALLYBOARD__ANALYSIS__API_KEY",
            GEMINI_API_KEY_ENV
        );
        bail!("analysis key is required by the finance tracker");
    }
    info!(model = %config.analysis.model, "Analysis enabled");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Finance tracker listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
