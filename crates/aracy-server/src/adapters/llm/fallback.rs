//! Ordered provider fallback.

use std::sync::Arc;

use async_trait::async_trait;

use aracy::{CompletionProvider, CompletionRequest, CompletionResponse, DomainError};

/// Tries each provider in order and returns the first success.
#[derive(Clone, Default)]
pub struct FallbackChain {
    providers: Vec<Arc<dyn CompletionProvider>>,
}

impl FallbackChain {
    pub fn new(providers: Vec<Arc<dyn CompletionProvider>>) -> Self {
        Self { providers }
    }

    pub fn push(&mut self, provider: Arc<dyn CompletionProvider>) {
        self.providers.push(provider);
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers
            .iter()
            .map(|p| p.provider_name().to_string())
            .collect()
    }
}

#[async_trait]
impl CompletionProvider for FallbackChain {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        if self.providers.is_empty() {
            return Err(DomainError::ProviderUnavailable(
                "no completion provider configured".to_string(),
            ));
        }

        let mut attempts = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            match provider.complete(request).await {
                Ok(response) => {
                    tracing::debug!(
                        "Completion from {} ({})",
                        provider.provider_name(),
                        response.model
                    );
                    return Ok(response);
                }
                Err(e) => {
                    tracing::warn!("⚠️  {} failed: {}", provider.provider_name(), e);
                    attempts.push(format!("{}: {}", provider.provider_name(), e));
                }
            }
        }

        Err(DomainError::ProviderExhausted { attempts })
    }

    fn provider_name(&self) -> &str {
        "fallback"
    }
}
