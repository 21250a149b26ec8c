//! Vault Routes - Crystallization and Listing
//!
//! HTTP handlers that delegate to CrystallizationService and the vault store.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use aracy::CrystallizeRecord;

use super::{reported, ApiError};
use crate::models::{CrystallizeRequest, CrystallizeResponse, ErrorResponse, VaultResponse};
use crate::AppState;

/// Crystallize approved alints into the vault
#[utoipa::path(
    post,
    path = "/api/vault/crystallize",
    request_body = CrystallizeRequest,
    responses(
        (status = 200, description = "Alints crystallized", body = CrystallizeResponse),
        (status = 400, description = "No alints provided", body = ErrorResponse),
        (status = 500, description = "Vault I/O error", body = ErrorResponse)
    ),
    tag = "Vault"
)]
pub async fn crystallize_alints(
    State(state): State<AppState>,
    Json(payload): Json<CrystallizeRequest>,
) -> Result<Json<CrystallizeResponse>, ApiError> {
    let records: Vec<CrystallizeRecord> = payload
        .alints
        .into_iter()
        .map(CrystallizeRecord::from)
        .collect();

    match state.crystallization_service.crystallize(records).await {
        Ok(count) => Ok(Json(CrystallizeResponse::success(count))),
        Err(e) => Err(reported(&state, "Crystallization failed", e).await),
    }
}

/// List the vault
#[utoipa::path(
    get,
    path = "/api/vault",
    responses(
        (status = 200, description = "Vault contents", body = VaultResponse),
        (status = 500, description = "Vault I/O error", body = ErrorResponse)
    ),
    tag = "Vault"
)]
pub async fn get_vault(State(state): State<AppState>) -> Result<Json<VaultResponse>, ApiError> {
    match state.vault.load().await {
        Ok(vault) => Ok(Json(VaultResponse::from(vault))),
        Err(e) => Err(reported(&state, "Failed to load vault", e).await),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/vault", get(get_vault))
        .route("/api/vault/crystallize", post(crystallize_alints))
}
