//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod error_log_repository;
mod vault_repository;

pub use error_log_repository::*;
pub use vault_repository::*;
