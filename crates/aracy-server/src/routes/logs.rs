//! Logs Routes - Reviewable Error Log
//!
//! Failures surfaced to clients are kept here until someone marks them ignored.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use aracy::DomainError;

use super::{reported, ApiError};
use crate::models::{
    ErrorLogEntryResponse, ErrorLogResponse, ErrorResponse, IgnoreLogQuery, IgnoreLogResponse,
};
use crate::AppState;

/// List every logged error, ignored ones included
#[utoipa::path(
    get,
    path = "/api/logs/errors",
    responses(
        (status = 200, description = "Logged errors", body = ErrorLogResponse),
        (status = 500, description = "Error log unreadable", body = ErrorResponse)
    ),
    tag = "Logs"
)]
pub async fn list_errors(
    State(state): State<AppState>,
) -> Result<Json<ErrorLogResponse>, ApiError> {
    match state.error_log.list().await {
        Ok(entries) => Ok(Json(ErrorLogResponse {
            errors: entries.into_iter().map(ErrorLogEntryResponse::from).collect(),
        })),
        Err(e) => Err(reported(&state, "Failed to retrieve error logs", e).await),
    }
}

/// Mark the entries logged at `timestamp` as ignored
#[utoipa::path(
    post,
    path = "/api/logs/ignore",
    params(IgnoreLogQuery),
    responses(
        (status = 200, description = "Entry ignored", body = IgnoreLogResponse),
        (status = 400, description = "Missing timestamp", body = ErrorResponse),
        (status = 404, description = "No entry at that timestamp", body = ErrorResponse)
    ),
    tag = "Logs"
)]
pub async fn ignore_error(
    State(state): State<AppState>,
    Query(query): Query<IgnoreLogQuery>,
) -> Result<Json<IgnoreLogResponse>, ApiError> {
    let timestamp = query
        .timestamp
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DomainError::Validation("Timestamp parameter required".to_string()))?;

    let ignored = state.error_log.ignore(&timestamp).await?;
    if !ignored {
        return Err(DomainError::not_found("ErrorLogEntry", &timestamp).into());
    }

    tracing::info!("🔕 Ignored error log entry {}", timestamp);
    Ok(Json(IgnoreLogResponse {
        status: "ignored".to_string(),
        timestamp,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/logs/errors", get(list_errors))
        .route("/api/logs/ignore", post(ignore_error))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use aracy::{ErrorLogRepository, VaultRepository};

    use crate::adapters::InMemoryVaultRepository;
    use crate::testing::{test_state, ScriptedProvider};

    fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_and_ignore() {
        let dir = tempfile::tempdir().unwrap();
        let vault: Arc<dyn VaultRepository> = Arc::new(InMemoryVaultRepository::default());
        let (state, error_log) =
            test_state(Arc::new(ScriptedProvider::named("test")), vault, dir.path());
        let entry = error_log.record("ERROR", "vault exploded").await.unwrap();
        let app = super::super::router().with_state(state);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/api/logs/errors").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"][0]["message"], "vault exploded");
        assert_eq!(json["errors"][0]["ignored"], false);

        let response = app
            .oneshot(post(&format!("/api/logs/ignore?timestamp={}", entry.timestamp)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ignored");
        assert_eq!(json["timestamp"], entry.timestamp);

        assert!(error_log.list().await.unwrap()[0].ignored);
    }

    #[tokio::test]
    async fn test_ignore_requires_known_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let vault: Arc<dyn VaultRepository> = Arc::new(InMemoryVaultRepository::default());
        let (state, _) = test_state(Arc::new(ScriptedProvider::named("test")), vault, dir.path());
        let app = super::super::router().with_state(state);

        let response = app.clone().oneshot(post("/api/logs/ignore")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Validation error: Timestamp parameter required");

        let response = app
            .oneshot(post("/api/logs/ignore?timestamp=1999-01-01T00:00:00"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["error"],
            "Entity not found: ErrorLogEntry with id 1999-01-01T00:00:00"
        );
    }
}
