//! JSON file implementation of VaultRepository
//!
//! The vault lives in a single `{"alints": [...]}` document. All writes go
//! through one lock so concurrent upserts are serialized.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use aracy::{AlintItem, DomainError, UpsertSummary, Vault, VaultRepository};

use crate::adapters::json_store::{read_json, write_json};

pub struct JsonFileVaultRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileVaultRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vault, DomainError> {
        read_json(&self.path)
            .await
            .map_err(|e| DomainError::VaultIo(format!("read {}: {e}", self.path.display())))
    }
}

#[async_trait]
impl VaultRepository for JsonFileVaultRepository {
    async fn load(&self) -> Result<Vault, DomainError> {
        self.read().await
    }

    async fn upsert(&self, items: Vec<AlintItem>) -> Result<UpsertSummary, DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut vault = self.read().await?;
        let summary = vault.upsert_all(items);

        if summary.written() > 0 {
            write_json(&self.path, &vault)
                .await
                .map_err(|e| DomainError::VaultIo(format!("write {}: {e}", self.path.display())))?;
            tracing::debug!(
                "Vault written: {} inserted, {} updated ({} total)",
                summary.inserted,
                summary.updated,
                vault.len()
            );
        }

        Ok(summary)
    }
}
