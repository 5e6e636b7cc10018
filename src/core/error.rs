//! Error types for server startup and lifecycle.
//!
//! Errors raised while serving a tool call never reach this type: the server
//! handler turns them into protocol errors and keeps serving.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain, e.g. an unusable upstream
    /// base URL when the clients are built.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),
}
