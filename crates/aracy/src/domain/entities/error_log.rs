//! ErrorLogEntry - reviewable error record

use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLogEntry {
    /// ISO-8601 local time, second precision; doubles as the entry id
    pub timestamp: String,
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub ignored: bool,
}

impl ErrorLogEntry {
    pub fn new(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            level: level.into(),
            message: message.into(),
            ignored: false,
        }
    }
}
