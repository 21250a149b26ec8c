use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use aracy::{CompletionProvider, ErrorLogRepository, MuseProfile, VaultRepository};

use adapters::{
    FallbackChain, GeminiProvider, GroqProvider, InMemoryVaultRepository, JsonFileErrorLog,
    JsonFileVaultRepository,
};
use application::{BondNamingService, CrystallizationService, GenerationService};
use config::AppConfig;

/// Type aliases for application services over the configured vault store
pub type AppGenerationService = GenerationService<dyn VaultRepository>;
pub type AppCrystallizationService = CrystallizationService<dyn VaultRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<AppGenerationService>,
    pub crystallization_service: Arc<AppCrystallizationService>,
    pub bond_naming_service: Arc<BondNamingService>,
    pub vault: Arc<dyn VaultRepository>,
    pub error_log: Arc<dyn ErrorLogRepository>,
    pub muse: Arc<MuseProfile>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed by the runtime
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn build_provider(config: &AppConfig) -> FallbackChain {
    let mut chain = FallbackChain::default();

    if let Some(groq) = &config.groq {
        let provider = GroqProvider::new(groq.api_key.clone());
        let provider = match &groq.model {
            Some(model) => provider.with_model(model.clone()),
            None => provider,
        };
        chain.push(Arc::new(provider));
        tracing::info!("⚡ Groq provider enabled");
    }

    if let Some(gemini) = &config.gemini {
        chain.push(Arc::new(
            GeminiProvider::new(gemini.api_key.clone()).with_models(gemini.models.clone()),
        ));
        tracing::info!("🔮 Gemini provider enabled ({})", gemini.models.join(", "));
    }

    if chain.is_empty() {
        tracing::warn!(
            "⚠️  No GROQ_API_KEY or GEMINI_API_KEY set - serving from vault and fallbacks only"
        );
    } else {
        tracing::info!("🔗 Provider order: {}", chain.provider_names().join(" → "));
    }

    chain
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    init_tracing();
    tracing::info!("🪞 ARACY API initializing...");

    if dotenvy::dotenv().is_ok() {
        tracing::info!("📄 Loaded .env");
    }

    let config = AppConfig::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))?;

    let vault: Arc<dyn VaultRepository> = match &config.vault_path {
        Some(path) => {
            let repo = JsonFileVaultRepository::new(path.clone());
            tracing::info!("💎 Vault file: {}", repo.path().display());
            Arc::new(repo)
        }
        None => {
            tracing::warn!("⚠️  No VAULT_PATH set - vault kept in memory only");
            Arc::new(InMemoryVaultRepository::default())
        }
    };

    let error_log: Arc<dyn ErrorLogRepository> =
        Arc::new(JsonFileErrorLog::new(config.error_log_path.clone()));

    let provider: Arc<dyn CompletionProvider> = Arc::new(build_provider(&config));
    let muse = Arc::new(config.muse.clone());

    if muse.name.is_empty() {
        tracing::warn!("⚠️  No MUSE_NAME set - prompts carry an empty profile");
    }

    let state = AppState {
        generation_service: Arc::new(GenerationService::new(
            vault.clone(),
            provider.clone(),
            config.muse.clone(),
        )),
        bond_naming_service: Arc::new(BondNamingService::new(provider, config.muse)),
        crystallization_service: Arc::new(CrystallizationService::new(vault.clone())),
        vault,
        error_log,
        muse,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ ARACY API ready - 19 reflections await");

    Ok(router.into())
}
