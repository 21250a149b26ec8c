//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the vault store and the completion provider.

mod bond_naming_service;
mod crystallization_service;
mod generation_service;

pub use bond_naming_service::BondNamingService;
pub use crystallization_service::CrystallizationService;
pub use generation_service::{GenerationService, GenerationSettings};
