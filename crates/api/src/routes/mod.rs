//! API route definitions.

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use std::sync::Arc;
use tallyboard_core::export::XLSX_CONTENT_TYPE;

use crate::AppState;

pub mod effort;
pub mod health;
pub mod sessions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(effort::routes())
        .merge(sessions::routes())
}

/// Workbook download response.
pub(crate) fn xlsx_attachment(buffer: Arc<[u8]>, filename: &'static str) -> Response {
    let disposition = format!("attachment; filename=\"{filename}\"");
    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(XLSX_CONTENT_TYPE)),
            (
                header::CONTENT_DISPOSITION,
                HeaderValue::from_str(&disposition)
                    .unwrap_or_else(|_| HeaderValue::from_static("attachment")),
            ),
        ],
        buffer.to_vec(),
    )
        .into_response()
}
