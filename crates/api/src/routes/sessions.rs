//! Finance tracker routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post, put},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tallyboard_core::analysis::AnalysisReport;
use tallyboard_core::export::{ExportService, LEDGER_FILENAME};
use tallyboard_core::import::{ImportService, ImportWarning};
use tallyboard_core::ledger::{ExpenseCategory, LedgerEntry};
use tallyboard_core::session::{SessionError, SessionSnapshot};
use tallyboard_core::summary::FinanceSummary;
use tallyboard_shared::AppError;
use tallyboard_shared::types::SessionId;
use tracing::{info, warn};

use super::xlsx_attachment;
use crate::extract::{AppJson, AppMultipart, AppPath};
use crate::{AppState, error::ApiError};

/// Multipart field carrying the uploaded file.
const UPLOAD_FIELD: &str = "file";

/// Creates the finance tracker routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session).delete(delete_session))
        .route("/sessions/{id}/entries", post(add_entry))
        .route("/sessions/{id}/import", post(import_entries))
        .route("/sessions/{id}/income", put(set_income))
        .route("/sessions/{id}/summary", get(get_summary))
        .route("/sessions/{id}/export", get(export_ledger))
        .route("/sessions/{id}/analysis", post(analyze_session))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a manual entry.
#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    /// Expense name.
    pub name: String,
    /// Amount, strictly positive.
    pub amount: Decimal,
    /// English or Portuguese category label.
    pub category: String,
}

/// Response for a recorded entry.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    /// The stored entry.
    pub entry: LedgerEntry<ExpenseCategory>,
    /// Totals after the entry.
    pub summary: FinanceSummary,
}

/// Request body for the monthly income.
#[derive(Debug, Deserialize)]
pub struct SetIncomeRequest {
    /// Monthly income, zero or more.
    pub income: Decimal,
}

/// Response for a file import.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    /// Entries appended to the ledger.
    pub imported: usize,
    /// Rows dropped for a missing or invalid name or amount.
    pub dropped_rows: usize,
    /// Warnings for the user.
    pub warnings: Vec<ImportWarning>,
    /// Totals after the import.
    pub summary: FinanceSummary,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/sessions`
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    let id = state.sessions.create();
    let snapshot = state.sessions.with_session(id, |session| session.snapshot())?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

/// GET `/sessions/{id}`
async fn get_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<SessionId>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let snapshot = state.sessions.with_session(id, |session| session.snapshot())?;
    Ok(Json(snapshot))
}

/// DELETE `/sessions/{id}`
async fn delete_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<SessionId>,
) -> Result<StatusCode, ApiError> {
    if !state.sessions.remove(id) {
        return Err(SessionError::NotFound(id).into());
    }
    info!(session_id = %id, "Session deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST `/sessions/{id}/entries`
async fn add_entry(
    State(state): State<AppState>,
    AppPath(id): AppPath<SessionId>,
    AppJson(payload): AppJson<AddEntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), ApiError> {
    let category: ExpenseCategory = payload.category.parse().map_err(SessionError::from)?;

    let response = state.sessions.with_session_mut(id, |session| {
        let entry = session
            .record(&payload.name, payload.amount, category)?
            .clone();
        Ok::<_, SessionError>(EntryResponse {
            entry,
            summary: session.summary(),
        })
    })??;

    info!(session_id = %id, category = %category, "Expense recorded");
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST `/sessions/{id}/import`
///
/// Expects a multipart body with a `file` field (`.csv`, `.xlsx` or `.xls`).
async fn import_entries(
    State(state): State<AppState>,
    AppPath(id): AppPath<SessionId>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<Json<ImportResponse>, ApiError> {
    state.sessions.with_session(id, |_| ())?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        upload = Some((filename, bytes));
        break;
    }

    let Some((filename, bytes)) = upload else {
        let message = format!("Missing multipart field '{UPLOAD_FIELD}'");
        return Err(AppError::Validation(message).into());
    };

    let outcome = ImportService::import_file(&filename, &bytes);
    if outcome.is_rejected() {
        let message = outcome
            .warnings
            .first()
            .map(ToString::to_string)
            .unwrap_or_default();
        warn!(session_id = %id, %filename, "Rejected import");
        return Err(AppError::UnsupportedFile(message).into());
    }

    let (applied, summary) = state.sessions.with_session_mut(id, |session| {
        let applied = session.apply_import(outcome);
        (applied, session.summary())
    })?;

    Ok(Json(ImportResponse {
        imported: applied.imported(),
        dropped_rows: applied.dropped_rows,
        warnings: applied.warnings,
        summary,
    }))
}

/// PUT `/sessions/{id}/income`
async fn set_income(
    State(state): State<AppState>,
    AppPath(id): AppPath<SessionId>,
    AppJson(payload): AppJson<SetIncomeRequest>,
) -> Result<Json<FinanceSummary>, ApiError> {
    let summary = state.sessions.with_session_mut(id, |session| {
        session.set_income(payload.income)?;
        Ok::<_, SessionError>(session.summary())
    })??;
    Ok(Json(summary))
}

/// GET `/sessions/{id}/summary`
async fn get_summary(
    State(state): State<AppState>,
    AppPath(id): AppPath<SessionId>,
) -> Result<Json<FinanceSummary>, ApiError> {
    let summary = state.sessions.with_session(id, |session| session.summary())?;
    Ok(Json(summary))
}

/// GET `/sessions/{id}/export`
async fn export_ledger(
    State(state): State<AppState>,
    AppPath(id): AppPath<SessionId>,
) -> Result<Response, ApiError> {
    let workbook = state.sessions.with_session(id, |session| {
        state.cache.export_with(session.export_key(), || {
            ExportService::ledger_workbook(session.ledger())
        })
    })??;

    info!(session_id = %id, cached = workbook.cached, "Exported ledger workbook");
    Ok(xlsx_attachment(workbook.value, LEDGER_FILENAME))
}

/// POST `/sessions/{id}/analysis`
async fn analyze_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<SessionId>,
) -> Result<Json<AnalysisReport>, ApiError> {
    let subject = state
        .sessions
        .with_session(id, |session| session.analysis_subject())?;
    let report = state
        .analysis
        .analyze(state.analyst.as_ref(), &subject)
        .await;
    Ok(Json(report))
}
