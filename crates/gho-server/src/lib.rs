//! # GHO Data Server
//!
//! MCP protocol server for the WHO Global Health Observatory (GHO) OData
//! API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gho_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Default config (gho.toml lookup + GHO_* environment)
//!     run(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`McpServer`] | Main server struct |
//! | [`McpServerBuilder`] | Builder for server construction |
//!
//! ## Tools
//!
//! | Tool | Required | Optional |
//! |------|----------|----------|
//! | `list_dimensions` | | |
//! | `list_dimension_codes` | `dimension_code` | |
//! | `search_indicators` | `keywords` | |
//! | `get_health_data` | `indicator_code` | `filter`, `limit`, `order_by` |
//! | `get_country_data` | `indicator_code` | `country_code`, `year`, `sex`, `limit` |
//! | `get_cross_table` | `indicator_code` | `countries`, `years`, `sex`, `limit` |

pub mod args;
pub mod builder;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;
pub mod transport;

pub use builder::{BuilderError, McpServerBuilder};
pub use init::run;
pub use mcp_server::McpServer;
