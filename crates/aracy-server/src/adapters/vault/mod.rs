//! Vault Repository Implementations

mod in_memory;
mod json_file;

pub use in_memory::InMemoryVaultRepository;
pub use json_file::JsonFileVaultRepository;
