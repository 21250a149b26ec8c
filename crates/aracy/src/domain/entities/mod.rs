//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - AlintItem / Vault: the durable collection of alints
//! - Generation: request and result entries of the lab pipeline
//! - MuseProfile: the fixed profile every alint is tailored to
//! - ErrorLogEntry: reviewable error records

mod alint;
mod error_log;
mod generation;
mod profile;

pub use alint::*;
pub use error_log::*;
pub use generation::*;
pub use profile::*;
