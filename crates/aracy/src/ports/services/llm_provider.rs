//! LLM Provider Port
//!
//! Abstract interface for text-completion calls. Each backend (Groq,
//! Gemini, ...) has its own implementation; a fallback chain composes them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A message in a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Options for LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Temperature (0.0 - 2.0)
    pub temperature: Option<f32>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: Some(2048),
            temperature: Some(0.8),
        }
    }
}

/// A completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    /// Ask the backend for JSON output
    pub structured: bool,
    pub options: CompletionOptions,
}

impl CompletionRequest {
    /// Single user prompt behind an optional system framing
    pub fn prompt(system: Option<&str>, prompt: &str, structured: bool) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(prompt));
        Self {
            messages,
            structured,
            options: CompletionOptions::default(),
        }
    }

    /// System and user content flattened into one text, for backends
    /// without chat roles
    pub fn flattened(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Response from LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated text content
    pub content: String,
    /// Model that generated the response
    pub model: String,
}

/// Text-completion provider interface
///
/// Failures are reported as `DomainError::ProviderUnavailable` (no backend
/// reachable), `DomainError::ProviderError` (backend rejected the call) or
/// `DomainError::ProviderExhausted` (every fallback tried and failed).
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion
    async fn complete(&self, request: &CompletionRequest)
        -> Result<CompletionResponse, DomainError>;

    /// Send a prompt, optionally demanding structured output, and return the text
    async fn invoke(&self, prompt: &str, want_structured: bool) -> Result<String, DomainError> {
        let request = CompletionRequest::prompt(None, prompt, want_structured);
        let response = self.complete(&request).await?;
        Ok(response.content)
    }

    /// Get the provider name (e.g., "groq", "gemini")
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_request_with_system() {
        let request = CompletionRequest::prompt(Some("frame"), "ask", true);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, MessageRole::System);
        assert!(request.structured);
        assert_eq!(request.flattened(), "frame\n\nask");
    }
}
