//! Application configuration
//!
//! Values come from shuttle secrets first, then the process environment.
//! Blank values count as unset.

use std::path::PathBuf;

use anyhow::{bail, Result};

use aracy::{AstroChart, MuseProfile};

use crate::adapters::llm::DEFAULT_GEMINI_MODELS;

pub const DEFAULT_ERROR_LOG_PATH: &str = "error_log.json";

#[derive(Debug, Clone)]
pub struct GroqSettings {
    pub api_key: String,
    pub model: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub models: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` keeps the vault in memory only
    pub vault_path: Option<PathBuf>,
    pub error_log_path: PathBuf,
    pub groq: Option<GroqSettings>,
    pub gemini: Option<GeminiSettings>,
    pub muse: MuseProfile,
}

impl AppConfig {
    /// Build the configuration from a key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let text = |key: &str| get(key).unwrap_or_default();

        let groq = get("GROQ_API_KEY").map(|api_key| GroqSettings {
            api_key,
            model: get("GROQ_MODEL"),
        });

        let gemini = match get("GEMINI_API_KEY") {
            Some(api_key) => {
                let models = match get("GEMINI_MODELS") {
                    Some(raw) => {
                        let models: Vec<String> = raw
                            .split(',')
                            .map(str::trim)
                            .filter(|m| !m.is_empty())
                            .map(str::to_string)
                            .collect();
                        if models.is_empty() {
                            bail!("GEMINI_MODELS is set but names no model: {raw:?}");
                        }
                        models
                    }
                    None => DEFAULT_GEMINI_MODELS.iter().map(|m| m.to_string()).collect(),
                };
                Some(GeminiSettings { api_key, models })
            }
            None => None,
        };

        let muse = MuseProfile {
            name: text("MUSE_NAME"),
            birth_date: text("MUSE_BIRTH_DATE"),
            traits: text("MUSE_TRAITS"),
            astro: AstroChart {
                sun: text("ASTRO_SUN"),
                moon: text("ASTRO_MOON"),
                ascendant: text("ASTRO_ASC"),
                mercury: text("ASTRO_MERCURY"),
                venus: text("ASTRO_VENUS"),
                mars: text("ASTRO_MARS"),
                jupiter: text("ASTRO_JUPITER"),
                saturn: text("ASTRO_SATURN"),
                uranus: text("ASTRO_URANUS"),
                neptune: text("ASTRO_NEPTUNE"),
                pluto: text("ASTRO_PLUTO"),
            },
        };

        Ok(Self {
            vault_path: get("VAULT_PATH").map(PathBuf::from),
            error_log_path: get("ERROR_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ERROR_LOG_PATH)),
            groq,
            gemini,
            muse,
        })
    }
}
