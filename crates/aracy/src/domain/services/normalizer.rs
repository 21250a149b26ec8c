//! Response Normalizer
//!
//! Turns raw model text into candidate alints, whichever shape the model
//! answered in. Shapes are tried in a fixed order:
//!
//! 1. JSON array
//! 2. JSON object holding the items under `alints` (or the legacy `items`)
//! 3. Line-oriented text, one alint per line

use serde_json::{Map, Value};

use crate::domain::entities::{AlintEntry, LINE_SEPARATOR};

/// Primary key of the items in an object-shaped answer
pub const ITEMS_KEY: &str = "alints";
/// Legacy key accepted when the primary one is absent
pub const LEGACY_ITEMS_KEY: &str = "items";

/// The shape a model answer was decoded as
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    Array(Vec<Value>),
    Keyed(Vec<Value>),
    Lines(Vec<String>),
}

impl ResponseShape {
    /// Decode raw model text, first matching shape wins.
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str::<Value>(strip_code_fence(raw)) {
            Ok(Value::Array(values)) => Self::Array(values),
            Ok(Value::Object(map)) => match keyed_items(map) {
                Some(values) => Self::Keyed(values),
                None => Self::Lines(extract_lines(raw)),
            },
            _ => Self::Lines(extract_lines(raw)),
        }
    }

    pub fn into_entries(self) -> Vec<AlintEntry> {
        match self {
            Self::Array(values) | Self::Keyed(values) => {
                values.into_iter().filter_map(value_to_entry).collect()
            }
            Self::Lines(lines) => lines.into_iter().map(AlintEntry::Text).collect(),
        }
    }
}

/// Normalize raw model output into candidate entries. May return fewer
/// entries than requested; the caller decides sufficiency.
pub fn normalize_response(raw: &str) -> Vec<AlintEntry> {
    ResponseShape::decode(raw).into_entries()
}

fn keyed_items(mut map: Map<String, Value>) -> Option<Vec<Value>> {
    [ITEMS_KEY, LEGACY_ITEMS_KEY]
        .iter()
        .find_map(|key| match map.remove(*key) {
            Some(Value::Array(values)) => Some(values),
            _ => None,
        })
}

fn value_to_entry(value: Value) -> Option<AlintEntry> {
    match value {
        Value::Null => None,
        Value::String(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| AlintEntry::Text(text.to_string()))
        }
        Value::Object(map) => {
            let pair = match (map.get("word"), map.get("meaning")) {
                (Some(Value::String(word)), Some(Value::String(meaning))) => {
                    Some(format!("{}{}{}", word.trim(), LINE_SEPARATOR, meaning.trim()))
                }
                _ => None,
            };
            Some(match pair {
                Some(line) => AlintEntry::Text(line),
                None => AlintEntry::Structured(Value::Object(map)),
            })
        }
        other => Some(AlintEntry::Text(other.to_string())),
    }
}

/// Remove a surrounding markdown code fence (```json ... ```), if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn extract_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("```"))
        .map(strip_list_marker)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip a leading bullet (`-`, `*`, `•`) or ordinal (`1.`, `2)`, `3:`).
fn strip_list_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix(['-', '*', '•']) {
        return rest.trim_start();
    }

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix(['.', ')', ':']) {
            return rest.trim_start();
        }
    }

    line
}
