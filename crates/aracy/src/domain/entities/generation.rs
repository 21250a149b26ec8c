//! Generation - request parameters and result entries of the lab pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alint::AlintItem;

fn default_style() -> String {
    "deep".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

/// Parameters of a generation run. All fields are advisory hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub catalysts: Vec<String>,
    #[serde(default)]
    pub vibe: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            style: default_style(),
            language: default_language(),
            catalysts: Vec::new(),
            vibe: String::new(),
        }
    }
}

/// One element of a generation result: a `"Word - Meaning"` line, or an
/// object the model answered with that has no word/meaning pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlintEntry {
    Text(String),
    Structured(serde_json::Value),
}

impl AlintEntry {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }
}

impl From<String> for AlintEntry {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for AlintEntry {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// An externally supplied alint to crystallize
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrystallizeRecord {
    pub word: Option<String>,
    pub meaning: Option<String>,
    pub language: Option<String>,
    pub vibe: Option<String>,
}

impl CrystallizeRecord {
    /// Build the crystallized vault item, or `None` when word or meaning is missing.
    pub fn into_item(self, at: DateTime<Utc>) -> Option<AlintItem> {
        let word = self.word.filter(|w| !w.trim().is_empty())?;
        let meaning = self.meaning.filter(|m| !m.trim().is_empty())?;
        Some(AlintItem::crystallized(
            word.trim(),
            meaning.trim(),
            self.language.unwrap_or_else(|| "Unknown".to_string()),
            self.vibe.unwrap_or_else(|| "Deep".to_string()),
            at,
        ))
    }
}
