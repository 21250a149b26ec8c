//! Gemini generateContent provider.
//!
//! Models are tried in configured order. A model answering 429 or
//! `RESOURCE_EXHAUSTED` is skipped quietly; other failures are logged and
//! the next model is tried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use aracy::{
    CompletionProvider, CompletionRequest, CompletionResponse, DomainError, MessageRole,
};

use super::{map_http_error, map_transport_error};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const PROVIDER: &str = "gemini";

pub const DEFAULT_GEMINI_MODELS: [&str; 3] =
    ["gemini-2.0-flash", "gemini-2.5-flash", "gemini-flash-latest"];

#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    models: Vec<String>,
}

/// Outcome of a single model call
enum ModelFailure {
    RateLimited,
    Failed(DomainError),
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            models: DEFAULT_GEMINI_MODELS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Overrides the model list, tried in order
    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn call_model(
        &self,
        model: &str,
        body: &GenerateContentRequest<'_>,
    ) -> Result<String, ModelFailure> {
        let url = format!("{}/{model}:generateContent", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ModelFailure::Failed(map_transport_error(PROVIDER, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            if is_rate_limited(status, &body) {
                return Err(ModelFailure::RateLimited);
            }
            return Err(ModelFailure::Failed(map_http_error(PROVIDER, status, &body)));
        }

        let payload: Value = response.json().await.map_err(|e| {
            ModelFailure::Failed(DomainError::provider(
                PROVIDER,
                format!("invalid response: {e}"),
            ))
        })?;

        extract_answer(&payload).ok_or_else(|| {
            ModelFailure::Failed(DomainError::provider(PROVIDER, "no candidates returned"))
        })
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        if self.models.is_empty() {
            return Err(DomainError::ProviderUnavailable(
                "gemini: no models configured".to_string(),
            ));
        }

        let body = GenerateContentRequest::from_request(request);
        let mut attempts = Vec::with_capacity(self.models.len());

        for model in &self.models {
            match self.call_model(model, &body).await {
                Ok(content) => {
                    return Ok(CompletionResponse {
                        content,
                        model: model.clone(),
                    })
                }
                Err(ModelFailure::RateLimited) => {
                    attempts.push(format!("{PROVIDER}/{model}: rate limited"));
                }
                Err(ModelFailure::Failed(e)) => {
                    tracing::warn!("⚠️  Gemini model {} failed: {}", model, e);
                    attempts.push(format!("{PROVIDER}/{model}: {e}"));
                }
            }
        }

        Err(DomainError::ProviderExhausted { attempts })
    }

    fn provider_name(&self) -> &str {
        PROVIDER
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_request(request: &'a CompletionRequest) -> Self {
        let system_parts: Vec<Part<'a>> = request
            .messages
            .iter()
            .filter(|m| m.role == MessageRole::System)
            .map(|m| Part { text: &m.content })
            .collect();

        let contents = request
            .messages
            .iter()
            .filter(|m| m.role != MessageRole::System)
            .map(|m| Content {
                role: Some(match m.role {
                    MessageRole::Assistant => "model",
                    _ => "user",
                }),
                parts: vec![Part { text: &m.content }],
            })
            .collect();

        Self {
            system_instruction: (!system_parts.is_empty()).then_some(Content {
                role: None,
                parts: system_parts,
            }),
            contents,
            generation_config: GenerationConfig {
                temperature: request.options.temperature,
                max_output_tokens: request.options.max_tokens,
                response_mime_type: request.structured.then_some("application/json"),
            },
        }
    }
}

// ============================================
// Helper Functions
// ============================================

fn is_rate_limited(status: StatusCode, body: &str) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || body.contains("RESOURCE_EXHAUSTED")
}

fn extract_answer(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let collected: Vec<&str> = candidates
        .iter()
        .filter_map(|candidate| {
            candidate
                .get("content")
                .and_then(|content| content.get("parts"))
                .and_then(|parts| parts.as_array())
        })
        .flatten()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect();

    if collected.is_empty() {
        None
    } else {
        Some(collected.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_splits_system_instruction() {
        let request = CompletionRequest::prompt(Some("You are a muse."), "Give me words", true);
        let body = serde_json::to_value(GenerateContentRequest::from_request(&request)).unwrap();

        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are a muse.");
        assert!(body["systemInstruction"].get("role").is_none());
        assert_eq!(body["contents"].as_array().unwrap().len(), 1);
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_unstructured_request_omits_mime_type() {
        let request = CompletionRequest::prompt(None, "plain", false);
        let body = serde_json::to_value(GenerateContentRequest::from_request(&request)).unwrap();

        assert!(body.get("systemInstruction").is_none());
        assert!(body["generationConfig"].get("responseMimeType").is_none());
    }

    #[test]
    fn test_extract_answer_joins_parts() {
        let payload = json!({
            "candidates": [{
                "content": {"parts": [{"text": " [\"Lumen - light\"] "}, {"text": ""}]}
            }]
        });
        assert_eq!(
            extract_answer(&payload).as_deref(),
            Some("[\"Lumen - light\"]")
        );
        assert_eq!(extract_answer(&json!({"candidates": []})), None);
    }

    #[test]
    fn test_rate_limit_detection() {
        assert!(is_rate_limited(StatusCode::TOO_MANY_REQUESTS, ""));
        assert!(is_rate_limited(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#
        ));
        assert!(!is_rate_limited(StatusCode::INTERNAL_SERVER_ERROR, "boom"));
    }

    #[tokio::test]
    async fn test_no_models_is_unavailable() {
        let provider = GeminiProvider::new("key").with_models(Vec::new());
        let request = CompletionRequest::prompt(None, "x", true);
        let err = provider.complete(&request).await.unwrap_err();
        assert!(matches!(err, DomainError::ProviderUnavailable(_)));
    }

    #[tokio::test]
    async fn test_unreachable_models_exhaust() {
        let provider = GeminiProvider::new("key")
            .with_base_url("http://127.0.0.1:9")
            .with_models(vec!["a".to_string(), "b".to_string()]);
        let request = CompletionRequest::prompt(None, "x", true);
        match provider.complete(&request).await.unwrap_err() {
            DomainError::ProviderExhausted { attempts } => assert_eq!(attempts.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_errors_never_carry_api_key() {
        let secret = "AIza-super-secret-key";
        let provider = GeminiProvider::new(secret)
            .with_base_url("http://127.0.0.1:9")
            .with_models(vec!["gemini-2.0-flash".to_string()]);
        let request = CompletionRequest::prompt(None, "x", true);

        let err = provider.complete(&request).await.unwrap_err();
        assert!(!err.to_string().contains(secret));
        match err {
            DomainError::ProviderExhausted { attempts } => {
                assert_eq!(attempts.len(), 1);
                assert!(attempts.iter().all(|a| !a.contains(secret)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
