//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("No model provider reachable: {0}")]
    ProviderUnavailable(String),

    #[error("Provider {provider} failed: {message}")]
    ProviderError { provider: String, message: String },

    #[error("All model providers exhausted: {}", attempts.join("; "))]
    ProviderExhausted { attempts: Vec<String> },

    #[error("Expected {expected} alints from the model, extracted {extracted}")]
    NormalizationShortfall { expected: usize, extracted: usize },

    #[error("Generation exhausted: produced {produced} of {target} alints{}", last_error.as_deref().map(|e| format!(" (last error: {e})")).unwrap_or_default())]
    GenerationExhausted {
        target: usize,
        produced: usize,
        last_error: Option<String>,
    },

    #[error("Vault I/O error: {0}")]
    VaultIo(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No alints provided")]
    NoItemsProvided,

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn provider<P: AsRef<str>, M: Into<String>>(provider: P, message: M) -> Self {
        Self::ProviderError {
            provider: provider.as_ref().to_string(),
            message: message.into(),
        }
    }

    pub fn not_found<T: AsRef<str>>(entity_type: T, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the generation orchestrator may retry after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProviderUnavailable(_)
                | Self::ProviderError { .. }
                | Self::ProviderExhausted { .. }
                | Self::NormalizationShortfall { .. }
        )
    }
}
