//! Footprint - process resource usage

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FootprintResponse {
    /// Resident memory of the server process, MB rounded to two decimals
    #[schema(example = 48.37)]
    pub memory_mb: f64,
    pub cpu_percent: f32,
    /// Word count over the most recent error log messages
    pub estimated_tokens: usize,
    #[schema(example = "Linux")]
    pub system: String,
    pub version: String,
}
