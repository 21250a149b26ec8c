//! Vault - crystallization and listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aracy::{AlintItem, CrystallizeRecord, Vault};

/// One alint to crystallize. Records without word or meaning are skipped.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CrystallizeItem {
    pub word: Option<String>,
    pub meaning: Option<String>,
    /// Defaults to "Unknown"
    pub language: Option<String>,
    /// Defaults to "Deep"
    pub vibe: Option<String>,
}

impl From<CrystallizeItem> for CrystallizeRecord {
    fn from(item: CrystallizeItem) -> Self {
        Self {
            word: item.word,
            meaning: item.meaning,
            language: item.language,
            vibe: item.vibe,
        }
    }
}

/// Crystallize request (non-empty list)
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CrystallizeRequest {
    #[serde(default)]
    pub alints: Vec<CrystallizeItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CrystallizeResponse {
    pub status: String,
    pub message: String,
    pub crystallized_count: usize,
}

impl CrystallizeResponse {
    pub fn success(crystallized_count: usize) -> Self {
        Self {
            status: "success".to_string(),
            message: format!("Crystallized {crystallized_count} alints into the vault"),
            crystallized_count,
        }
    }
}

/// Vault item as exposed over HTTP
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlintResponse {
    pub word: String,
    pub meaning: String,
    pub language: String,
    pub vibe: String,
    pub crystallized: bool,
    pub crystallized_at: Option<DateTime<Utc>>,
}

impl From<AlintItem> for AlintResponse {
    fn from(item: AlintItem) -> Self {
        Self {
            word: item.word,
            meaning: item.meaning,
            language: item.language,
            vibe: item.vibe,
            crystallized: item.crystallized,
            crystallized_at: item.crystallized_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VaultResponse {
    pub total: usize,
    pub crystallized: usize,
    pub alints: Vec<AlintResponse>,
}

impl From<Vault> for VaultResponse {
    fn from(vault: Vault) -> Self {
        let crystallized = vault.alints.iter().filter(|a| a.crystallized).count();
        Self {
            total: vault.len(),
            crystallized,
            alints: vault.alints.into_iter().map(AlintResponse::from).collect(),
        }
    }
}
