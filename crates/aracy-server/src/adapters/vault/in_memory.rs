//! In-memory implementation of VaultRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use aracy::{AlintItem, DomainError, UpsertSummary, Vault, VaultRepository};

/// Process-local vault, used when no vault file is configured
#[derive(Default)]
pub struct InMemoryVaultRepository {
    vault: RwLock<Vault>,
}

impl InMemoryVaultRepository {
    pub fn new(vault: Vault) -> Self {
        Self {
            vault: RwLock::new(vault),
        }
    }
}

#[async_trait]
impl VaultRepository for InMemoryVaultRepository {
    async fn load(&self) -> Result<Vault, DomainError> {
        Ok(self.vault.read().await.clone())
    }

    async fn upsert(&self, items: Vec<AlintItem>) -> Result<UpsertSummary, DomainError> {
        Ok(self.vault.write().await.upsert_all(items))
    }
}
