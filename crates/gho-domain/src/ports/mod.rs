//! Domain Port Interfaces
//!
//! Boundary contracts between the domain and outer layers.

/// Upstream fetch capability
pub mod transport;

pub use transport::DataTransport;
