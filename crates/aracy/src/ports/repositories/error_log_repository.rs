//! Error Log Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, ErrorLogEntry};

/// Repository interface for the reviewable error log
#[async_trait]
pub trait ErrorLogRepository: Send + Sync {
    /// Append an entry
    async fn record(&self, level: &str, message: &str) -> Result<ErrorLogEntry, DomainError>;

    /// All entries, oldest first
    async fn list(&self) -> Result<Vec<ErrorLogEntry>, DomainError>;

    /// Mark every entry with `timestamp` as ignored. Returns false if none matched.
    async fn ignore(&self, timestamp: &str) -> Result<bool, DomainError>;
}
