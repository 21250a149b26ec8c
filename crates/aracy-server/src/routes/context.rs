//! Context Routes - Muse Profile

use axum::{extract::State, routing::get, Json, Router};

use crate::models::ContextResponse;
use crate::AppState;

/// The profile injected into every generation prompt
#[utoipa::path(
    get,
    path = "/api/context",
    responses(
        (status = 200, description = "Muse profile", body = ContextResponse)
    ),
    tag = "Context"
)]
pub async fn get_context(State(state): State<AppState>) -> Json<ContextResponse> {
    Json(ContextResponse::from(state.muse.as_ref()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/context", get(get_context))
}
