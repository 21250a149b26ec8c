//! Crystallization Application Service (Use Case)
//!
//! Marks user-approved alints as crystallized in the vault.

use std::sync::Arc;

use chrono::Utc;

use aracy::{AlintItem, CrystallizeRecord, DomainError, VaultRepository};

/// Application service for crystallization
pub struct CrystallizationService<V: VaultRepository + ?Sized> {
    vault: Arc<V>,
}

impl<V: VaultRepository + ?Sized> CrystallizationService<V> {
    pub fn new(vault: Arc<V>) -> Self {
        Self { vault }
    }

    /// Crystallize every record carrying both a word and a meaning.
    ///
    /// Returns how many vault items were inserted or updated.
    pub async fn crystallize(&self, records: Vec<CrystallizeRecord>) -> Result<usize, DomainError> {
        if records.is_empty() {
            return Err(DomainError::NoItemsProvided);
        }

        let submitted = records.len();
        let now = Utc::now();
        let items: Vec<AlintItem> = records
            .into_iter()
            .filter_map(|record| record.into_item(now))
            .collect();

        if items.len() < submitted {
            tracing::warn!(
                "⚠️  Skipped {} records without word or meaning",
                submitted - items.len()
            );
        }
        if items.is_empty() {
            return Ok(0);
        }

        let summary = self.vault.upsert(items).await?;
        tracing::info!(
            "💎 Crystallized {} alints ({} new, {} updated)",
            summary.written(),
            summary.inserted,
            summary.updated
        );

        Ok(summary.written())
    }
}
