//! Effort calculator routes.

use axum::{
    Json, Router,
    extract::State,
    response::Response,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tallyboard_core::analysis::{AnalysisReport, AnalysisSubject, Analyst};
use tallyboard_core::effort::{EffortEngine, EffortEstimate, PhaseLine};
use tallyboard_core::export::{EFFORT_FILENAME, ExportService};
use tallyboard_core::fingerprint::of_parts;
use tallyboard_core::summary::{Aggregator, EffortSummary};
use tracing::info;

use super::xlsx_attachment;
use crate::extract::{AppJson, AppQuery};
use crate::{AppState, error::ApiError};

/// Creates the effort calculator routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/effort", get(get_estimate))
        .route("/effort/export", get(export_estimate))
        .route("/effort/analysis", post(analyze_estimate))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query for the estimate endpoints.
#[derive(Debug, Deserialize)]
pub struct EffortQuery {
    /// Hour budget; the configured default when absent.
    pub hours: Option<u32>,
}

/// Request body for an effort analysis.
#[derive(Debug, Deserialize)]
pub struct EffortAnalysisRequest {
    /// Hour budget; the configured default when absent.
    #[serde(default)]
    pub hours: Option<u32>,
    /// Per-request key, used instead of the configured one.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Effort breakdown with its totals.
#[derive(Debug, Serialize)]
pub struct EffortResponse {
    /// Hour budget.
    pub hours_budget: u32,
    /// One line per phase.
    pub lines: Vec<PhaseLine>,
    /// Totals.
    pub summary: EffortSummary,
}

impl From<EffortEstimate> for EffortResponse {
    fn from(estimate: EffortEstimate) -> Self {
        let summary = Aggregator::summarize_effort(&estimate);
        Self {
            hours_budget: estimate.hours_budget,
            lines: estimate.lines,
            summary,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

fn estimate(state: &AppState, hours: Option<u32>) -> Result<EffortEstimate, ApiError> {
    let hours = hours.unwrap_or(state.config.effort.default_hours);
    Ok(EffortEngine::calculate(hours)?)
}

/// GET `/effort?hours=N`
async fn get_estimate(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<EffortQuery>,
) -> Result<Json<EffortResponse>, ApiError> {
    let estimate = estimate(&state, query.hours)?;
    Ok(Json(estimate.into()))
}

/// GET `/effort/export?hours=N`
async fn export_estimate(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<EffortQuery>,
) -> Result<Response, ApiError> {
    let estimate = estimate(&state, query.hours)?;
    let key = of_parts(&["effort-export", estimate.hours_budget.to_string().as_str()]);
    let workbook = state
        .cache
        .export_with(key, || ExportService::effort_workbook(&estimate))?;

    info!(
        hours = estimate.hours_budget,
        cached = workbook.cached,
        "Exported effort workbook"
    );
    Ok(xlsx_attachment(workbook.value, EFFORT_FILENAME))
}

/// POST `/effort/analysis`
///
/// A non-blank `api_key` in the body takes precedence over the configured key.
async fn analyze_estimate(
    State(state): State<AppState>,
    AppJson(payload): AppJson<EffortAnalysisRequest>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let estimate = estimate(&state, payload.hours)?;

    let request_analyst = payload
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| Analyst::gemini(&state.config.analysis, key));
    let analyst = request_analyst.as_ref().or(state.analyst.as_ref());

    let subject = AnalysisSubject::effort(&estimate);
    let report = state.analysis.analyze(analyst, &subject).await;
    Ok(Json(report))
}
