//! Lab Routes - Alint Generation
//!
//! HTTP handlers that delegate to GenerationService.

use axum::{extract::State, routing::post, Json, Router};

use aracy::GenerationRequest;

use super::{reported, ApiError};
use crate::models::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::AppState;

/// Generate exactly 19 alints
#[utoipa::path(
    post,
    path = "/api/lab/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Exactly 19 alints", body = GenerateResponse),
        (status = 500, description = "Generation exhausted", body = ErrorResponse)
    ),
    tag = "Lab"
)]
pub async fn generate_alints(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let request = GenerationRequest::from(payload);

    match state.generation_service.generate(&request).await {
        Ok(assembled) => Ok(Json(GenerateResponse {
            alints: assembled.entries,
        })),
        Err(e) => Err(reported(&state, "Alint generation failed", e).await),
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/lab/generate", post(generate_alints))
}
