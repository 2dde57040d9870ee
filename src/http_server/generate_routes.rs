//! Generate HTTP Route
//!
//! `GET /generate`: gather signals, derive a numeral for the current minute
//! and append it to the history.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::generator::{Generation, Generator};

// ==================
// Response Types
// ==================

/// Signal health and derivation intermediates of one round
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAudit {
    pub source_health: BTreeMap<String, bool>,
    pub errors: BTreeMap<String, String>,
    pub mode: String,
    pub seed: u32,
    pub canonical: String,
    pub recorded: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub number: String,
    pub audit: GenerateAudit,
}

impl From<Generation> for GenerateResponse {
    fn from(generation: Generation) -> Self {
        Self {
            success: true,
            audit: GenerateAudit {
                source_health: generation.report.health(),
                errors: generation.report.errors(),
                mode: generation.derivation.mode.as_str().to_string(),
                seed: generation.derivation.seed,
                canonical: generation.derivation.canonical,
                recorded: generation.recorded,
            },
            number: generation.number.into_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: &str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code: code.to_string(),
        }
    }
}

// ==================
// Routes
// ==================

/// Create generate routes
pub fn generate_routes(state: Arc<Generator>) -> Router {
    Router::new()
        .route("/generate", get(generate_handler))
        .with_state(state)
}

async fn generate_handler(
    State(generator): State<Arc<Generator>>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    match generator.generate().await {
        Ok(generation) => Ok(Json(generation.into())),
        // Records come from the clock; a rejection is an internal fault
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(e.code(), e.to_string())),
        )),
    }
}
