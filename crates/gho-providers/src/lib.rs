//! # GHO Data Server - Provider Implementations
//!
//! Implementations of the `DataTransport` port defined in `gho-domain`,
//! plus the XML feed decoding the HTTP transport relies on.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Transport | `DataTransport` | Reqwest, Null, Static |
//!
//! ## Usage
//!
//! ```ignore
//! use gho_providers::transport::ReqwestTransport;
//! use gho_providers::http::HttpClientConfig;
//! ```

// Re-export gho-domain types commonly used with providers
pub use gho_domain::error::{Error, Result};
pub use gho_domain::ports::DataTransport;

/// Provider-specific constants
pub mod constants;

/// HTTP client configuration
pub mod http;

/// Transport implementations
pub mod transport;

/// Shared utilities for provider implementations
pub mod utils;

/// XML body decoding
pub mod xml;
