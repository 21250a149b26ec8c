//! ARACY API Data Models
//!
//! - Lab: alint generation
//! - Vault: crystallization and vault listing
//! - Logs: reviewable error log
//! - Context / Bond: muse profile, partner linking and bond naming
//! - Footprint / Health: process resource usage and liveness

mod bond;
mod context;
mod footprint;
mod health;
mod lab;
mod logs;
mod vault;

pub use bond::*;
pub use context::*;
pub use footprint::*;
pub use health::*;
pub use lab::*;
pub use logs::*;
pub use vault::*;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
