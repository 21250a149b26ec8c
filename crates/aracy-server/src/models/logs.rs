//! Logs - reviewable error log

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use aracy::ErrorLogEntry;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorLogEntryResponse {
    /// Local time, second precision; identifies the entry
    #[schema(example = "2026-10-15T21:04:11")]
    pub timestamp: String,
    #[schema(example = "ERROR")]
    pub level: String,
    pub message: String,
    pub ignored: bool,
}

impl From<ErrorLogEntry> for ErrorLogEntryResponse {
    fn from(entry: ErrorLogEntry) -> Self {
        Self {
            timestamp: entry.timestamp,
            level: entry.level,
            message: entry.message,
            ignored: entry.ignored,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorLogResponse {
    pub errors: Vec<ErrorLogEntryResponse>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IgnoreLogQuery {
    /// Timestamp of the entry to ignore
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IgnoreLogResponse {
    pub status: String,
    pub timestamp: String,
}
