//! Footprint Routes - Process Resource Usage

use axum::{extract::State, routing::get, Json, Router};

use aracy::domain::services::estimate_tokens;

use crate::adapters::footprint::{sample_process, system_name};
use crate::models::FootprintResponse;
use crate::AppState;

/// Error log entries counted toward the token estimate
const RECENT_LOG_ENTRIES: usize = 10;

/// Memory, CPU and a rough token estimate for this server
#[utoipa::path(
    get,
    path = "/api/resource-footprint",
    responses(
        (status = 200, description = "Current footprint", body = FootprintResponse)
    ),
    tag = "Footprint"
)]
pub async fn resource_footprint(State(state): State<AppState>) -> Json<FootprintResponse> {
    let sample = sample_process().await;

    Json(FootprintResponse {
        memory_mb: sample.memory_mb,
        cpu_percent: sample.cpu_percent,
        estimated_tokens: recent_log_tokens(&state).await,
        system: system_name(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn recent_log_tokens(state: &AppState) -> usize {
    match state.error_log.list().await {
        Ok(entries) => entries
            .iter()
            .rev()
            .take(RECENT_LOG_ENTRIES)
            .map(|entry| estimate_tokens(&entry.message))
            .sum(),
        Err(e) => {
            tracing::warn!("⚠️  Error log unreadable for token estimate: {}", e);
            0
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/resource-footprint", get(resource_footprint))
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

    fn get_footprint() -> Request<Body> {
        Request::builder()
            .uri("/api/resource-footprint")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_tokens_count_last_ten_entries() {
        let dir = tempfile::tempdir().unwrap();
        let vault: Arc<dyn VaultRepository> = Arc::new(InMemoryVaultRepository::default());
        let (state, error_log) =
            test_state(Arc::new(ScriptedProvider::named("test")), vault, dir.path());

        error_log
            .record("ERROR", "this oldest entry falls outside the window")
            .await
            .unwrap();
        for _ in 0..10 {
            error_log.record("ERROR", "vault write failed").await.unwrap();
        }

        let app = super::super::router().with_state(state);
        let response = app.oneshot(get_footprint()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["estimated_tokens"], 30);
        assert!(json["memory_mb"].as_f64().unwrap() > 0.0);
        assert!(json["system"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn test_unreadable_log_counts_zero() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("error_log.json"), "not json").unwrap();
        let vault: Arc<dyn VaultRepository> = Arc::new(InMemoryVaultRepository::default());
        let (state, _) = test_state(Arc::new(ScriptedProvider::named("test")), vault, dir.path());

        let app = super::super::router().with_state(state);
        let response = app.oneshot(get_footprint()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["estimated_tokens"], 0);
    }
}
