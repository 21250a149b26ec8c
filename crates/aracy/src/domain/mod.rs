//! Domain Layer
//!
//! Alints, the vault, the muse profile and the generation pipeline steps.
//! Nothing here touches the network or the filesystem.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use services::{
    CRYSTALLIZED_PICK_CAP, FALLBACK_ALINTS, MAX_GENERATION_ATTEMPTS, TARGET_ALINT_COUNT,
    VAULT_SHARE,
};
pub use value_objects::*;
