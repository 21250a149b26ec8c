//! Vault Repository Port
//!
//! Abstract interface for vault persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, AlintItem, UpsertSummary, Vault};

/// Repository interface for the alint vault.
///
/// The vault is loaded and written as a whole. Implementations must apply
/// `upsert` as one atomic read-modify-write so that concurrent writers
/// never lose each other's items.
#[async_trait]
pub trait VaultRepository: Send + Sync {
    /// Load the full vault
    async fn load(&self) -> Result<Vault, DomainError>;

    /// Apply `Vault::upsert` to each item and persist the result
    async fn upsert(&self, items: Vec<AlintItem>) -> Result<UpsertSummary, DomainError>;
}
