//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns of the GHO data server.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading and validation |
//! | [`logging`] | Tracing subscriber setup |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`bootstrap`] | Composition root wiring transport and service |
//! | [`constants`] | Infrastructure constants |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app, init_app_with_transport};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader, LoggingConfig, UpstreamConfig};
