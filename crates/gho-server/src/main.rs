//! GHO Data Server
//!
//! MCP server over stdio exposing the WHO Global Health Observatory OData
//! API. Logs go to stderr.

use clap::Parser;
use gho_server::run;

/// Command line interface for the GHO data server
#[derive(Parser, Debug)]
#[command(name = "gho")]
#[command(about = "MCP server for the WHO Global Health Observatory OData API")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
