//! Bond Naming Application Service
//!
//! Asks the model for a short alchemical name for the muse's bond. Never
//! fails: an empty answer or a failed call falls back to a fixed name.

use std::sync::Arc;

use aracy::domain::services::{
    bond_name_prompt, clean_bond_name, BOND_NAME_FRAMING, EMPTY_BOND_NAME, FAILED_BOND_NAME,
};
use aracy::{CompletionOptions, CompletionProvider, CompletionRequest, MuseProfile};

pub struct BondNamingService {
    provider: Arc<dyn CompletionProvider>,
    profile: MuseProfile,
}

impl BondNamingService {
    pub fn new(provider: Arc<dyn CompletionProvider>, profile: MuseProfile) -> Self {
        Self { provider, profile }
    }

    pub async fn name(&self) -> String {
        let mut request = CompletionRequest::prompt(
            Some(BOND_NAME_FRAMING),
            &bond_name_prompt(&self.profile),
            false,
        );
        request.options = CompletionOptions {
            max_tokens: Some(50),
            temperature: Some(0.9),
        };

        match self.provider.complete(&request).await {
            Ok(response) => match clean_bond_name(&response.content) {
                Some(name) => {
                    tracing::info!("💞 Bond named {} via {}", name, response.model);
                    name
                }
                None => EMPTY_BOND_NAME.to_string(),
            },
            Err(e) => {
                tracing::warn!("⚠️  Bond name generation failed: {}", e);
                FAILED_BOND_NAME.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProvider;

    fn profile() -> MuseProfile {
        MuseProfile {
            name: "Selene".to_string(),
            traits: "Catalysis chemist".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_answer_is_cleaned_and_uppercased() {
        let provider = Arc::new(ScriptedProvider::named("groq").answer("\"Covalent Stardust\"\n"));
        let service = BondNamingService::new(provider.clone(), profile());

        assert_eq!(service.name().await, "COVALENT STARDUST");
        assert_eq!(provider.calls(), 1);
        let prompt = &provider.prompts()[0];
        assert!(prompt.starts_with(BOND_NAME_FRAMING));
        assert!(prompt.contains("- Muse: Selene, Catalysis chemist"));
    }

    #[tokio::test]
    async fn test_empty_answer_falls_back() {
        let provider = Arc::new(ScriptedProvider::named("groq").answer("   "));
        let service = BondNamingService::new(provider, profile());
        assert_eq!(service.name().await, EMPTY_BOND_NAME);
    }

    #[tokio::test]
    async fn test_failed_call_falls_back() {
        let provider = Arc::new(ScriptedProvider::named("groq").fail("HTTP 500: boom"));
        let service = BondNamingService::new(provider, profile());
        assert_eq!(service.name().await, FAILED_BOND_NAME);
    }
}
