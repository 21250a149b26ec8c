//! ARACY API Routes
//!
//! - /api/lab/generate - Alint generation (the 19)
//! - /api/vault - Vault listing and crystallization
//! - /api/logs - Reviewable error log
//! - /api/context - Muse profile
//! - /api/bond - Partner linking and bond naming
//! - /api/resource-footprint - Process resource usage
//! - /health - Liveness

pub mod bond;
pub mod context;
pub mod footprint;
pub mod health;
pub mod lab;
pub mod logs;
pub mod swagger;
pub mod vault;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use thiserror::Error;

use aracy::DomainError;

use crate::models::ErrorResponse;
use crate::AppState;

/// All API routes, without documentation or middleware
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(lab::router())
        .merge(vault::router())
        .merge(logs::router())
        .merge(context::router())
        .merge(bond::router())
        .merge(footprint::router())
        .merge(health::router())
}

/// Error surfaced to API clients as `{"error": "..."}`
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(e) => status_for(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// HTTP status for a domain error
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NoItemsProvided | DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Log a failure, keep it in the error log for review, and hand it back.
pub(crate) async fn reported(
    state: &AppState,
    context: &str,
    err: impl Into<ApiError>,
) -> ApiError {
    let err = err.into();
    let level = if err.status().is_server_error() {
        tracing::error!("❌ {}: {}", context, err);
        "ERROR"
    } else {
        tracing::warn!("⚠️  {}: {}", context, err);
        "WARNING"
    };

    if let Err(e) = state
        .error_log
        .record(level, &format!("{context}: {err}"))
        .await
    {
        tracing::warn!("⚠️  Failed to write error log: {}", e);
    }

    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&DomainError::NoItemsProvided), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&DomainError::not_found("Bond", "X")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&DomainError::GenerationExhausted {
                target: 19,
                produced: 0,
                last_error: None,
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(DomainError::Validation("x".to_string())).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
