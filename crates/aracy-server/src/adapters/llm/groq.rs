//! Groq chat completions with model discovery.
//!
//! The model is chosen once per provider from Groq's model listing,
//! preferring Mixtral, then Llama-3 (70B before 8B), then any recent chat
//! model. If discovery fails a known-good model is used.

use std::cmp::Reverse;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use aracy::{CompletionProvider, CompletionRequest, CompletionResponse, DomainError};

use super::{map_http_error, map_transport_error};

const BASE_URL: &str = "https://api.groq.com/openai/v1";
const PROVIDER: &str = "groq";

/// Used when model discovery fails
pub const HARD_FALLBACK_MODEL: &str = "llama-3.3-70b-versatile";

/// Entry of Groq's model listing
#[derive(Debug, Clone, Deserialize)]
pub struct GroqModel {
    pub id: String,
    #[serde(default)]
    pub created: i64,
}

/// Pick the best model from a listing, or `None` if the listing is empty.
pub fn hunt_model(models: &[GroqModel]) -> Option<String> {
    fn newest<'a>(candidates: impl Iterator<Item = &'a GroqModel>) -> Option<&'a GroqModel> {
        candidates.min_by_key(|m| Reverse(m.created))
    }

    let id_has = |m: &GroqModel, needles: &[&str]| {
        let id = m.id.to_lowercase();
        needles.iter().any(|n| id.contains(n))
    };

    let mixtral = newest(models.iter().filter(|m| id_has(m, &["mixtral"])));
    let llama3: Vec<&GroqModel> = models
        .iter()
        .filter(|m| id_has(m, &["llama-3", "llama3"]))
        .collect();
    let llama3_70b = newest(llama3.iter().copied().filter(|m| id_has(m, &["70b"])));
    let llama3_8b = newest(llama3.iter().copied().filter(|m| id_has(m, &["8b"])));
    let chat = newest(
        models
            .iter()
            .filter(|m| id_has(m, &["chat", "instruct", "versatile"])),
    );

    mixtral
        .or(llama3_70b)
        .or(llama3_8b)
        .or(chat)
        .or(models.first())
        .map(|m| m.id.clone())
}

pub struct GroqProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: OnceCell<String>,
}

impl GroqProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            model: OnceCell::new(),
        }
    }

    /// Pin a model and skip discovery
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = OnceCell::from(model.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn model(&self) -> &str {
        self.model
            .get_or_init(|| async {
                match self.list_models().await {
                    Ok(models) => match hunt_model(&models) {
                        Some(id) => {
                            tracing::info!("✧ Groq model selected: {}", id);
                            id
                        }
                        None => {
                            tracing::warn!(
                                "⚠️  Groq listed no models, using {}",
                                HARD_FALLBACK_MODEL
                            );
                            HARD_FALLBACK_MODEL.to_string()
                        }
                    },
                    Err(e) => {
                        tracing::warn!(
                            "⚠️  Groq model discovery failed: {}. Using {}",
                            e,
                            HARD_FALLBACK_MODEL
                        );
                        HARD_FALLBACK_MODEL.to_string()
                    }
                }
            })
            .await
    }

    async fn list_models(&self) -> Result<Vec<GroqModel>, DomainError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| map_transport_error(PROVIDER, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(PROVIDER, status, &body));
        }

        let listing: ModelListing = response
            .json()
            .await
            .map_err(|e| DomainError::provider(PROVIDER, format!("invalid model listing: {e}")))?;

        Ok(listing.data)
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        let model = self.model().await.to_string();

        let body = ChatCompletionRequest {
            model: &model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role,
                    content: &m.content,
                })
                .collect(),
            temperature: request.options.temperature,
            max_tokens: request.options.max_tokens,
            response_format: request.structured.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| map_transport_error(PROVIDER, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(PROVIDER, status, &body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::provider(PROVIDER, format!("invalid response: {e}")))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::provider(PROVIDER, "empty completion"))?;

        Ok(CompletionResponse { content, model })
    }

    fn provider_name(&self) -> &str {
        PROVIDER
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Deserialize)]
struct ModelListing {
    data: Vec<GroqModel>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: aracy::MessageRole,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: &str, created: i64) -> GroqModel {
        GroqModel {
            id: id.to_string(),
            created,
        }
    }

    #[test]
    fn test_prefers_newest_mixtral() {
        let models = vec![
            model("llama-3.3-70b-versatile", 300),
            model("mixtral-8x7b-32768", 100),
            model("mixtral-8x22b", 200),
        ];
        assert_eq!(hunt_model(&models).as_deref(), Some("mixtral-8x22b"));
    }

    #[test]
    fn test_llama3_70b_before_8b() {
        let models = vec![
            model("llama3-8b-8192", 500),
            model("llama-3.1-70b-versatile", 100),
            model("gemma2-9b-it", 900),
        ];
        assert_eq!(
            hunt_model(&models).as_deref(),
            Some("llama-3.1-70b-versatile")
        );

        let only_8b = vec![model("gemma2-9b-it", 900), model("llama3-8b-8192", 500)];
        assert_eq!(hunt_model(&only_8b).as_deref(), Some("llama3-8b-8192"));
    }

    #[test]
    fn test_recent_chat_model_then_first() {
        let models = vec![
            model("whisper-large-v3", 900),
            model("qwen-chat", 100),
            model("deepseek-instruct", 200),
        ];
        assert_eq!(hunt_model(&models).as_deref(), Some("deepseek-instruct"));

        let none_match = vec![model("whisper-large-v3", 1), model("distil-whisper", 2)];
        assert_eq!(hunt_model(&none_match).as_deref(), Some("whisper-large-v3"));

        assert_eq!(hunt_model(&[]), None);
    }

    #[test]
    fn test_structured_request_sets_json_mode() {
        let body = ChatCompletionRequest {
            model: "m",
            messages: vec![WireMessage {
                role: aracy::MessageRole::User,
                content: "hi",
            }],
            temperature: Some(0.8),
            max_tokens: None,
            response_format: Some(ResponseFormat {
                kind: "json_object",
            }),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][0]["role"], "user");
        assert!(json.get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_pinned_model_skips_discovery() {
        let provider = GroqProvider::new("key")
            .with_base_url("http://127.0.0.1:9")
            .with_model("llama3-8b-8192");
        assert_eq!(provider.model().await, "llama3-8b-8192");
    }

    #[tokio::test]
    async fn test_unreachable_backend_hides_api_key() {
        let secret = "gsk-super-secret-key";
        let provider = GroqProvider::new(secret).with_base_url("http://127.0.0.1:9");
        let request = CompletionRequest::prompt(None, "x", false);

        let err = provider.complete(&request).await.unwrap_err();
        assert!(matches!(err, DomainError::ProviderUnavailable(_)));
        assert!(!err.to_string().contains(secret));
    }
}
