//! Lab - alint generation

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use aracy::{AlintEntry, GenerationRequest};

/// Generate request. Every field is optional.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Category (silly, deep, astro, general, ...)
    #[serde(default = "default_style")]
    #[schema(example = "deep")]
    pub style: String,
    #[serde(default = "default_language")]
    #[schema(example = "en")]
    pub language: String,
    #[serde(default)]
    pub catalysts: Vec<String>,
    #[serde(default)]
    pub vibe: String,
}

fn default_style() -> String {
    GenerationRequest::default().style
}

fn default_language() -> String {
    GenerationRequest::default().language
}

impl From<GenerateRequest> for GenerationRequest {
    fn from(req: GenerateRequest) -> Self {
        Self {
            style: req.style,
            language: req.language,
            catalysts: req.catalysts,
            vibe: req.vibe,
        }
    }
}

/// Exactly 19 alints: vault picks first, then new ones, then filler
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// `"Word - Meaning"` strings, or objects the model answered with
    #[schema(value_type = Vec<Object>)]
    pub alints: Vec<AlintEntry>,
}
