//! Generation Application Service (Use Case)
//!
//! Runs the alint lab pipeline: vault selection, prompt, model calls with
//! bounded retry, normalization, assembly to the target count and
//! best-effort persistence of new alints.

use std::sync::Arc;

use aracy::domain::services::{
    assemble_result, generation_prompt, normalize_response, persistable_items, retry_bounded,
    select_from_vault, Assembled, Attempt, SYSTEM_FRAMING,
};
use aracy::{
    AlintEntry, CompletionProvider, CompletionRequest, DomainError, GenerationRequest,
    MuseProfile, Vault, VaultRepository, MAX_GENERATION_ATTEMPTS, TARGET_ALINT_COUNT,
    VAULT_SHARE,
};

/// Tunables of a generation run
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub target: usize,
    pub vault_share: usize,
    pub max_attempts: usize,
    pub fallback_pool: Vec<String>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            target: TARGET_ALINT_COUNT,
            vault_share: VAULT_SHARE,
            max_attempts: MAX_GENERATION_ATTEMPTS,
            fallback_pool: aracy::domain::FALLBACK_ALINTS
                .iter()
                .map(|line| line.to_string())
                .collect(),
        }
    }
}

/// Application service for alint generation
pub struct GenerationService<V: VaultRepository + ?Sized> {
    vault: Arc<V>,
    provider: Arc<dyn CompletionProvider>,
    profile: MuseProfile,
    settings: GenerationSettings,
}

impl<V: VaultRepository + ?Sized> GenerationService<V> {
    pub fn new(vault: Arc<V>, provider: Arc<dyn CompletionProvider>, profile: MuseProfile) -> Self {
        Self {
            vault,
            provider,
            profile,
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Produce exactly `settings.target` alints for the request.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Assembled, DomainError> {
        let vault = match self.vault.load().await {
            Ok(vault) => vault,
            Err(e) => {
                tracing::warn!("⚠️  Vault unavailable, generating without it: {}", e);
                Vault::default()
            }
        };

        let vault_lines: Vec<AlintEntry> = {
            let mut rng = rand::thread_rng();
            select_from_vault(
                &vault,
                &request.style,
                &request.language,
                self.settings.vault_share,
                &mut rng,
            )
            .iter()
            .map(|item| AlintEntry::Text(item.as_line()))
            .collect()
        };

        let needed = self.settings.target.saturating_sub(vault_lines.len());
        tracing::info!(
            "✧ Generating {} alints (style={}, language={}): {} from vault, {} requested",
            self.settings.target,
            request.style,
            request.language,
            vault_lines.len(),
            needed
        );

        let (generated, last_error) = if needed > 0 {
            let prompt = generation_prompt(&self.profile, request, needed);
            let prompt = prompt.as_str();
            let outcome = retry_bounded(self.settings.max_attempts, move |_| {
                self.attempt(prompt, needed)
            })
            .await;
            if !outcome.complete {
                tracing::warn!(
                    "⚠️  Model produced {} of {} alints after {} attempts",
                    outcome.value.as_ref().map_or(0, Vec::len),
                    needed,
                    outcome.attempts
                );
            }
            (outcome.value.unwrap_or_default(), outcome.last_error)
        } else {
            (Vec::new(), None)
        };

        let keep = persistable_items(&generated, &request.language, &request.style);

        let assembled = {
            let mut rng = rand::thread_rng();
            assemble_result(
                vault_lines,
                generated,
                &self.settings.fallback_pool,
                self.settings.target,
                &mut rng,
            )
        }
        .ok_or_else(|| DomainError::GenerationExhausted {
            target: self.settings.target,
            produced: 0,
            last_error: last_error.map(|e| e.to_string()),
        })?;

        if assembled.fallback > 0 || assembled.padded > 0 {
            tracing::warn!(
                "⚠️  Filled {} from fallback pool, padded {}",
                assembled.fallback,
                assembled.padded
            );
        }

        if !keep.is_empty() {
            match self.vault.upsert(keep).await {
                Ok(summary) => tracing::info!(
                    "💾 Vault updated: {} new alints, {} already known",
                    summary.inserted,
                    summary.unchanged
                ),
                Err(e) => tracing::warn!("⚠️  Failed to persist generated alints: {}", e),
            }
        }

        Ok(assembled)
    }

    /// One model call: complete when it yields at least `needed` entries.
    async fn attempt(
        &self,
        prompt: &str,
        needed: usize,
    ) -> Result<Attempt<Vec<AlintEntry>>, DomainError> {
        let request = CompletionRequest::prompt(Some(SYSTEM_FRAMING), prompt, true);
        let response = self.provider.complete(&request).await?;

        let mut entries = normalize_response(&response.content);
        if entries.len() >= needed {
            entries.truncate(needed);
            Ok(Attempt::Complete(entries))
        } else {
            let extracted = entries.len();
            Ok(Attempt::Partial(
                entries,
                DomainError::NormalizationShortfall {
                    expected: needed,
                    extracted,
                },
            ))
        }
    }
}
