//! Bond Routes - Partner Linking and Naming
//!
//! Only the demo bond code is known until bonds are persisted.

use axum::{extract::State, routing::post, Json, Router};

use aracy::DomainError;

use super::ApiError;
use crate::models::{BondLinkRequest, BondLinkResponse, BondNameResponse, ErrorResponse};
use crate::AppState;

const DEMO_BOND_CODE: &str = "DEMO123";
const DEMO_BOND_ID: &str = "demo-bond-id";

/// Link a user to a bond by code
#[utoipa::path(
    post,
    path = "/api/bond/link",
    request_body = BondLinkRequest,
    responses(
        (status = 200, description = "Bond linked", body = BondLinkResponse),
        (status = 404, description = "Bond code not found", body = ErrorResponse)
    ),
    tag = "Bond"
)]
pub async fn link_bond(
    Json(payload): Json<BondLinkRequest>,
) -> Result<Json<BondLinkResponse>, ApiError> {
    let code = payload.bond_code.trim();
    if code != DEMO_BOND_CODE {
        return Err(DomainError::not_found("Bond", code).into());
    }

    tracing::info!("🔗 Linked user {} to bond {}", payload.user_id, DEMO_BOND_ID);
    Ok(Json(BondLinkResponse {
        status: "linked".to_string(),
        bond_id: Some(DEMO_BOND_ID.to_string()),
    }))
}

/// Generate a mystical name for the muse's bond
///
/// Always answers; a failed model call yields a fixed fallback name.
#[utoipa::path(
    post,
    path = "/api/bond/name",
    responses(
        (status = 200, description = "Bond name", body = BondNameResponse)
    ),
    tag = "Bond"
)]
pub async fn name_bond(State(state): State<AppState>) -> Json<BondNameResponse> {
    Json(BondNameResponse {
        bond_name: state.bond_naming_service.name().await,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/bond/link", post(link_bond))
        .route("/api/bond/name", post(name_bond))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use aracy::VaultRepository;

    use crate::adapters::InMemoryVaultRepository;
    use crate::testing::{test_state, ScriptedProvider};

    fn link(code: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/bond/link")
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{"bond_code": "{code}", "user_id": "u-1"}}"#
            )))
            .unwrap()
    }

    fn name() -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/bond/name")
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_demo_code_links() {
        let dir = tempfile::tempdir().unwrap();
        let vault: Arc<dyn VaultRepository> = Arc::new(InMemoryVaultRepository::default());
        let (state, _) = test_state(Arc::new(ScriptedProvider::named("test")), vault, dir.path());
        let app = super::super::router().with_state(state);

        let response = app.clone().oneshot(link("DEMO123")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["status"], "linked");
        assert_eq!(json["bond_id"], "demo-bond-id");

        let response = app.oneshot(link("NOPE")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = json_body(response).await;
        assert_eq!(json["error"], "Entity not found: Bond with id NOPE");
    }

    #[tokio::test]
    async fn test_bond_name_from_model() {
        let dir = tempfile::tempdir().unwrap();
        let vault: Arc<dyn VaultRepository> = Arc::new(InMemoryVaultRepository::default());
        let provider = Arc::new(ScriptedProvider::named("groq").answer("Nebula Catalyst"));
        let (state, _) = test_state(provider.clone(), vault, dir.path());
        let app = super::super::router().with_state(state);

        let response = app.oneshot(name()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["bond_name"], "NEBULA CATALYST");
        assert!(provider.prompts()[0].contains("- Muse: Selene, Catalysis chemist"));
    }

    #[tokio::test]
    async fn test_bond_name_survives_provider_failure() {
        let dir = tempfile::tempdir().unwrap();
        let vault: Arc<dyn VaultRepository> = Arc::new(InMemoryVaultRepository::default());
        let provider = Arc::new(ScriptedProvider::named("groq").fail("HTTP 503: overloaded"));
        let (state, _) = test_state(provider, vault, dir.path());
        let app = super::super::router().with_state(state);

        let response = app.oneshot(name()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["bond_name"], "STELLAR UNION");
    }
}
