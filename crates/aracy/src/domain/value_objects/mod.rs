//! Value Objects
//!
//! Immutable value types used throughout the domain.

mod style;

pub use style::*;
