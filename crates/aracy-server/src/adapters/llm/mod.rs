//! LLM Provider Implementations
//!
//! - `GroqProvider`: OpenAI-compatible chat completions with model discovery
//! - `GeminiProvider`: generateContent across a list of models
//! - `FallbackChain`: tries providers in order

mod fallback;
mod gemini;
mod groq;

pub use fallback::FallbackChain;
pub use gemini::{GeminiProvider, DEFAULT_GEMINI_MODELS};
pub use groq::GroqProvider;

use reqwest::StatusCode;

use aracy::DomainError;

/// Map a non-success HTTP answer to a provider error, preferring the
/// backend's own `error.message`.
pub(crate) fn map_http_error(provider: &str, status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    DomainError::provider(provider, format!("HTTP {}: {}", status.as_u16(), message))
}

/// Transport failures mean the backend is unreachable; anything else is a
/// failed call. The request URL is stripped so credentials never reach
/// logs or responses.
pub(crate) fn map_transport_error(provider: &str, err: reqwest::Error) -> DomainError {
    let err = err.without_url();
    if err.is_connect() || err.is_timeout() {
        DomainError::ProviderUnavailable(format!("{provider}: {err}"))
    } else {
        DomainError::provider(provider, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_http_error_prefers_error_message() {
        let err = map_http_error(
            "groq",
            StatusCode::BAD_REQUEST,
            r#"{"error": {"message": "model decommissioned"}}"#,
        );
        assert_eq!(
            err.to_string(),
            "Provider groq failed: HTTP 400: model decommissioned"
        );

        let err = map_http_error("gemini", StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Provider gemini failed: HTTP 502: upstream down");
    }

    #[tokio::test]
    async fn test_transport_error_drops_request_url() {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/models/flash:generateContent?key=leaky-secret")
            .send()
            .await
            .unwrap_err();

        let mapped = map_transport_error("gemini", err);
        assert!(matches!(mapped, DomainError::ProviderUnavailable(_)));
        assert!(!mapped.to_string().contains("leaky-secret"));
    }
}
