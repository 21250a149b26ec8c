//! ARACY Domain Library
//!
//! Core domain types and interfaces for the ARACY alint lab.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (AlintItem, Vault, MuseProfile, ErrorLogEntry)
//!   - `value_objects/`: Immutable value types (Style)
//!   - `services/`: Pipeline logic (normalizer, selector, assembly, retry, prompt,
//!     bond naming, token estimate)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use aracy::domain::{AlintItem, Vault};
//! use aracy::ports::{VaultRepository, CompletionProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AlintEntry, AlintItem, AstroChart, CrystallizeRecord, DomainError, ErrorLogEntry,
    GenerationRequest, MuseProfile, Style, UpsertOutcome, UpsertSummary, Vault,
    CRYSTALLIZED_PICK_CAP, MAX_GENERATION_ATTEMPTS, TARGET_ALINT_COUNT, VAULT_SHARE,
};
pub use ports::{
    ChatMessage, CompletionOptions, CompletionProvider, CompletionRequest, CompletionResponse,
    ErrorLogRepository, MessageRole, VaultRepository,
};
