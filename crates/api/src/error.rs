//! JSON error responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tallyboard_core::effort::EffortError;
use tallyboard_core::export::ExportError;
use tallyboard_core::session::SessionError;
use tallyboard_shared::AppError;

/// Handler error rendered as `{"error": CODE, "message": text}`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = match &self.0 {
            AppError::NotFound(m)
            | AppError::Validation(m)
            | AppError::UnsupportedFile(m)
            | AppError::Export(m) => m.clone(),
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl From<SessionError> for ApiError {
    fn from(error: SessionError) -> Self {
        let app = match &error {
            SessionError::NotFound(_) => AppError::NotFound(error.to_string()),
            SessionError::Ledger(_) | SessionError::NegativeIncome(_) => {
                AppError::Validation(error.to_string())
            }
        };
        Self(app)
    }
}

impl From<EffortError> for ApiError {
    fn from(error: EffortError) -> Self {
        Self(AppError::Validation(error.to_string()))
    }
}

impl From<ExportError> for ApiError {
    fn from(error: ExportError) -> Self {
        tracing::error!(error = %error, "Workbook export failed");
        Self(AppError::Export(error.to_string()))
    }
}
