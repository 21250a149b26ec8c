//! Ports
//!
//! - `repositories`: vault and error log stores
//! - `services`: text-completion providers
//!
//! The server crate supplies the implementations.

pub mod repositories;
pub mod services;

pub use repositories::*;
pub use services::*;
