//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output, the mode MCP hosts use
//! to launch local servers. Framing is handled by `rmcp`; this module owns
//! the connection lifecycle and shutdown on interrupt.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
