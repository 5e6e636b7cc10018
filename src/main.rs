//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It initializes logging,
//! loads configuration, and serves MCP over stdio until the client
//! disconnects or an interrupt is received.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use moteurimmo_mcp_server::core::{Config, McpServer, StdioTransport};
use moteurimmo_mcp_server::domains::tools::ToolRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);
    config.log_startup_warnings();

    // Create the MCP server
    let server = McpServer::new(config)?;

    info!(
        "Server initialized with tools: {}",
        ToolRegistry::tool_names().join(", ")
    );

    StdioTransport::run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr without ANSI colors: stdout carries the MCP protocol
/// and hosts usually capture stderr into a log file. `RUST_LOG` directives
/// are honored on top of the configured level.
fn init_logging(level: &str) {
    let level = level.parse::<Level>().unwrap_or(Level::INFO);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}
