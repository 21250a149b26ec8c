//! Alint - short creative text item, and the Vault that keeps them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Separator between word and meaning in the rendered line form
pub const LINE_SEPARATOR: &str = " - ";

fn default_language() -> String {
    "en".to_string()
}

/// A single alint as stored in the vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlintItem {
    pub word: String,
    pub meaning: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub crystallized: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crystallized_at: Option<DateTime<Utc>>,
}

impl AlintItem {
    /// A freshly generated, not yet curated alint
    pub fn generated(
        word: impl Into<String>,
        meaning: impl Into<String>,
        language: impl Into<String>,
        vibe: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            meaning: meaning.into(),
            language: language.into(),
            vibe: vibe.into(),
            crystallized: false,
            crystallized_at: None,
        }
    }

    /// An alint a human has curated at `at`
    pub fn crystallized(
        word: impl Into<String>,
        meaning: impl Into<String>,
        language: impl Into<String>,
        vibe: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            crystallized: true,
            crystallized_at: Some(at),
            ..Self::generated(word, meaning, language, vibe)
        }
    }

    /// Case-insensitive identity of the alint within a vault
    pub fn key(&self) -> String {
        self.word.trim().to_lowercase()
    }

    /// Render as `"Word - Meaning"`
    pub fn as_line(&self) -> String {
        format!("{}{}{}", self.word, LINE_SEPARATOR, self.meaning)
    }

    /// Split a `"Word - Meaning"` line at its first separator.
    /// Returns `None` when either side is empty.
    pub fn split_line(line: &str) -> Option<(&str, &str)> {
        let (word, meaning) = line.split_once(LINE_SEPARATOR)?;
        let (word, meaning) = (word.trim(), meaning.trim());
        if word.is_empty() || meaning.is_empty() {
            return None;
        }
        Some((word, meaning))
    }
}

/// Result of upserting a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged,
}

/// Aggregate of a batch upsert
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertSummary {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl UpsertSummary {
    /// Items that were written (inserted or updated)
    pub fn written(&self) -> usize {
        self.inserted + self.updated
    }

    fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Inserted => self.inserted += 1,
            UpsertOutcome::Updated => self.updated += 1,
            UpsertOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

/// Vault - ordered collection of alints, persisted as a whole
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vault {
    #[serde(default)]
    pub alints: Vec<AlintItem>,
}

impl Vault {
    pub fn new(alints: Vec<AlintItem>) -> Self {
        Self { alints }
    }

    pub fn len(&self) -> usize {
        self.alints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alints.is_empty()
    }

    /// Find an alint by word, ignoring case
    pub fn find(&self, word: &str) -> Option<&AlintItem> {
        let key = word.trim().to_lowercase();
        self.alints.iter().find(|a| a.key() == key)
    }

    /// Insert or update following the vault's uniqueness rule.
    ///
    /// Existing word + crystallized incoming item: updated in place.
    /// Existing word otherwise: no-op. Unknown word: appended.
    pub fn upsert(&mut self, item: AlintItem) -> UpsertOutcome {
        let key = item.key();
        match self.alints.iter_mut().find(|a| a.key() == key) {
            Some(existing) if item.crystallized => {
                existing.meaning = item.meaning;
                existing.language = item.language;
                existing.vibe = item.vibe;
                if !existing.crystallized {
                    existing.crystallized = true;
                    existing.crystallized_at = item.crystallized_at.or_else(|| Some(Utc::now()));
                }
                UpsertOutcome::Updated
            }
            Some(_) => UpsertOutcome::Unchanged,
            None => {
                self.alints.push(item);
                UpsertOutcome::Inserted
            }
        }
    }

    pub fn upsert_all(&mut self, items: impl IntoIterator<Item = AlintItem>) -> UpsertSummary {
        let mut summary = UpsertSummary::default();
        for item in items {
            summary.record(self.upsert(item));
        }
        summary
    }
}
