//! # Domain Layer
//!
//! Entities, value objects and port contracts for the GHO data server.
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`entities`] | Normalized output shapes and envelopes |
//! | [`value_objects`] | Operation parameters and protocol values |
//! | [`ports`] | Transport contract |
//! | [`constants`] | Protocol constants |
//! | [`error`] | Domain error types |

/// Domain-level constants
pub mod constants;
/// Normalized output entities
pub mod entities;
/// Domain error types
pub mod error;
/// Port traits
pub mod ports;
/// Immutable value objects
pub mod value_objects;

// Re-export commonly used types for convenience
pub use entities::*;
pub use error::{Error, Result};
pub use ports::DataTransport;
pub use value_objects::*;
