//! JSON file implementation of ErrorLogRepository

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use aracy::{DomainError, ErrorLogEntry, ErrorLogRepository};

use super::json_store::{read_json, write_json};

pub struct JsonFileErrorLog {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read(&self) -> Result<Vec<ErrorLogEntry>, DomainError> {
        read_json(&self.path)
            .await
            .map_err(|e| DomainError::Storage(format!("read {}: {e}", self.path.display())))
    }

    async fn write(&self, entries: &[ErrorLogEntry]) -> Result<(), DomainError> {
        write_json(&self.path, entries)
            .await
            .map_err(|e| DomainError::Storage(format!("write {}: {e}", self.path.display())))
    }
}

#[async_trait]
impl ErrorLogRepository for JsonFileErrorLog {
    async fn record(&self, level: &str, message: &str) -> Result<ErrorLogEntry, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read().await?;
        let entry = ErrorLogEntry::new(level, message);
        entries.push(entry.clone());
        self.write(&entries).await?;
        Ok(entry)
    }

    async fn list(&self) -> Result<Vec<ErrorLogEntry>, DomainError> {
        self.read().await
    }

    async fn ignore(&self, timestamp: &str) -> Result<bool, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read().await?;

        let mut updated = false;
        for entry in entries.iter_mut().filter(|e| e.timestamp == timestamp) {
            entry.ignored = true;
            updated = true;
        }

        if updated {
            self.write(&entries).await?;
        }
        Ok(updated)
    }
}
