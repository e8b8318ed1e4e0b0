//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for the effort calculator and the finance tracker
//! - Mapping of domain errors onto JSON error bodies
//! - Shared application state

pub mod error;
pub mod extract;
pub mod routes;

#[cfg(test)]
mod test_support;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::header::AUTHORIZATION;
use std::iter::once;
use std::sync::Arc;
use tallyboard_core::analysis::{AnalysisService, Analyst};
use tallyboard_core::cache::DashboardCache;
use tallyboard_core::session::SessionStore;
use tallyboard_shared::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::sensitive_headers::SetSensitiveRequestHeadersLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Live finance sessions.
    pub sessions: SessionStore,
    /// Memoized analyses and exports.
    pub cache: DashboardCache,
    /// Guarded analysis runner sharing `cache`.
    pub analysis: AnalysisService,
    /// Analyst for the configured credential, if any.
    pub analyst: Option<Analyst>,
}

impl AppState {
    /// Builds the state, creating a Gemini analyst when a key is configured.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let analyst = Analyst::from_config(&config.analysis);
        Self::with_analyst(config, analyst)
    }

    /// Builds the state around an explicit analyst.
    #[must_use]
    pub fn with_analyst(config: AppConfig, analyst: Option<Analyst>) -> Self {
        let cache = DashboardCache::from_config(&config.cache);
        Self {
            config: Arc::new(config),
            sessions: SessionStore::new(),
            analysis: AnalysisService::new(cache.clone()),
            cache,
            analyst,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(SetSensitiveRequestHeadersLayer::new(once(AUTHORIZATION)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
