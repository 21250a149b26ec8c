//! Test doubles shared across the server crate.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use aracy::{
    AlintItem, CompletionProvider, CompletionRequest, CompletionResponse, DomainError,
    MuseProfile, UpsertSummary, Vault, VaultRepository,
};

use crate::adapters::JsonFileErrorLog;
use crate::application::{
    BondNamingService, CrystallizationService, GenerationService, GenerationSettings,
};
use crate::AppState;

/// Provider answering from a queue. When the queue runs dry the last
/// scripted step repeats.
pub struct ScriptedProvider {
    name: String,
    steps: Mutex<VecDeque<Result<String, String>>>,
    last: Mutex<Option<Result<String, String>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            steps: Mutex::new(VecDeque::new()),
            last: Mutex::new(None),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn answer(self, text: impl Into<String>) -> Self {
        self.steps.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        self.steps.lock().unwrap().push_back(Err(message.into()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(request.flattened());

        let step = {
            let mut steps = self.steps.lock().unwrap();
            let mut last = self.last.lock().unwrap();
            match steps.pop_front() {
                Some(step) => {
                    *last = Some(step.clone());
                    Some(step)
                }
                None => last.clone(),
            }
        };

        match step {
            Some(Ok(content)) => Ok(CompletionResponse {
                content,
                model: format!("{}-test", self.name),
            }),
            Some(Err(message)) => Err(DomainError::provider(&self.name, message)),
            None => Err(DomainError::ProviderUnavailable(format!(
                "{}: nothing scripted",
                self.name
            ))),
        }
    }

    fn provider_name(&self) -> &str {
        &self.name
    }
}

/// Vault whose every operation fails
pub struct FailingVault;

#[async_trait]
impl VaultRepository for FailingVault {
    async fn load(&self) -> Result<Vault, DomainError> {
        Err(DomainError::VaultIo("disk on fire".to_string()))
    }

    async fn upsert(&self, _items: Vec<AlintItem>) -> Result<UpsertSummary, DomainError> {
        Err(DomainError::VaultIo("disk on fire".to_string()))
    }
}

/// App state over the given provider and vault, with the error log kept in `dir`
pub fn test_state(
    provider: Arc<dyn CompletionProvider>,
    vault: Arc<dyn VaultRepository>,
    dir: &Path,
) -> (AppState, Arc<JsonFileErrorLog>) {
    test_state_with(provider, vault, dir, GenerationSettings::default())
}

pub fn test_state_with(
    provider: Arc<dyn CompletionProvider>,
    vault: Arc<dyn VaultRepository>,
    dir: &Path,
    settings: GenerationSettings,
) -> (AppState, Arc<JsonFileErrorLog>) {
    let error_log = Arc::new(JsonFileErrorLog::new(dir.join("error_log.json")));
    let muse = MuseProfile {
        name: "Selene".to_string(),
        traits: "Catalysis chemist, stargazer".to_string(),
        ..MuseProfile::default()
    };

    let state = AppState {
        generation_service: Arc::new(
            GenerationService::new(vault.clone(), provider.clone(), muse.clone())
                .with_settings(settings),
        ),
        bond_naming_service: Arc::new(BondNamingService::new(provider, muse.clone())),
        crystallization_service: Arc::new(CrystallizationService::new(vault.clone())),
        vault,
        error_log: error_log.clone(),
        muse: Arc::new(muse),
    };

    (state, error_log)
}
