//! History HTTP Routes
//!
//! `GET /history` lists recent numerals, newest first; `DELETE /history`
//! clears them.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::generator::Generator;
use crate::history::{HistoryEntry, HistoryError};
use crate::observability::{log_event, Event};

use super::generate_routes::ErrorResponse;

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub entries: Vec<HistoryEntry>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
}

type HistoryReply<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Create history routes
pub fn history_routes(state: Arc<Generator>) -> Router {
    Router::new()
        .route("/history", get(list_handler).delete(clear_handler))
        .with_state(state)
}

fn history_error(e: HistoryError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(e.code(), e.to_string())))
}

async fn list_handler(State(generator): State<Arc<Generator>>) -> HistoryReply<HistoryResponse> {
    let entries = generator.history().list().map_err(history_error)?;
    Ok(Json(HistoryResponse {
        success: true,
        total: entries.len(),
        entries,
    }))
}

async fn clear_handler(State(generator): State<Arc<Generator>>) -> HistoryReply<ClearResponse> {
    generator.history().clear().map_err(history_error)?;
    log_event(Event::HistoryCleared);
    Ok(Json(ClearResponse { success: true }))
}
