//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool maps one MCP call onto one upstream HTTP request.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - The closed tool catalog (`ToolKind`)
//! - `dispatcher.rs` - Runs a tool call and classifies its outcome
//! - `upstream.rs` - HTTP clients for the listings and address APIs
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with its params, `to_tool()` and `execute()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a `ToolKind` variant; the compiler then points at every match to extend

pub mod definitions;
mod dispatcher;
mod error;
mod registry;
pub mod upstream;

#[cfg(test)]
pub(crate) mod stub;

pub use dispatcher::{InvocationResult, ToolDispatcher};
pub use error::{ToolError, UpstreamService};
pub use registry::{ToolKind, ToolRegistry};
