//! MoteurImmo MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that lets an
//! LLM client search French real estate listings on MoteurImmo, fetch a
//! single listing, and resolve a city name to its INSEE code.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, the
//!   MCP server handler and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool catalog, the dispatcher and the upstream HTTP clients
//!
//! # Example
//!
//! ```rust,no_run
//! use moteurimmo_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
