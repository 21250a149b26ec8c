//! Health - liveness answer

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthCheck {
    #[schema(example = "ok")]
    pub status: String,
    pub message: String,
    pub version: String,
}
