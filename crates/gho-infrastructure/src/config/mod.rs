//! Configuration management
//!
//! - types.rs - configuration data types
//! - loader.rs - layered loading, validation and persistence

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, UpstreamConfig};
