//! Server Initialization
//!
//! Loads configuration, sets up logging, wires the application and serves
//! MCP over stdio.

use std::path::Path;

use gho_infrastructure::config::{AppConfig, ConfigLoader};
use gho_infrastructure::{init_app, logging};
use tracing::info;

use crate::McpServerBuilder;
use crate::transport::StdioServerExt;

/// Run the GHO data server
///
/// Returns when the MCP client closes the session.
pub async fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    logging::init_logging(&config.logging)?;

    info!(
        base_url = %config.upstream.base_url,
        format = %config.upstream.accept_format,
        timeout_secs = config.upstream.timeout_secs,
        "Starting GHO data server"
    );

    let context = init_app(config)?;
    let server = McpServerBuilder::new()
        .with_health_data_service(context.health_data_service())
        .build()?;

    server.serve_stdio().await
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}
