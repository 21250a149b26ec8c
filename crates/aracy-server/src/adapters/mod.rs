//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod error_log;
pub mod footprint;
mod json_store;
pub mod llm;
pub mod vault;

// Re-exports
pub use error_log::JsonFileErrorLog;
pub use llm::{FallbackChain, GeminiProvider, GroqProvider};
pub use vault::{InMemoryVaultRepository, JsonFileVaultRepository};
