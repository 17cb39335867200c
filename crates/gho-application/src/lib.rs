//! Application Layer - GHO data server
//!
//! Query composition and response normalization for the GHO OData service.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`query`] | URL and `$filter` composition |
//! | [`normalize`] | Payload projection and cross table summaries |
//! | [`ports`] | Service interfaces consumed by the MCP shell |
//! | [`use_cases`] | Service implementations |
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `gho-domain`: entities, errors and the `DataTransport` port
//! - Pure Rust libraries for encoding, logging and async traits

pub mod normalize;
pub mod ports;
pub mod query;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
