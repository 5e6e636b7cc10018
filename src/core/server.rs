//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler. It is the only place where
//! tool errors are translated into MCP protocol error codes:
//!
//! - unknown tool → `METHOD_NOT_FOUND`
//! - anything else → `INTERNAL_ERROR`, message prefixed with `Failed to fetch data:`

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{error, info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::{ToolDispatcher, ToolError, ToolRegistry};

const INSTRUCTIONS: &str = "Real estate listings from MoteurImmo. \
     Use search_city_insee_code to find the INSEE code of a city, then pass it in the \
     `location` filter of search_ads. Use get_ad to fetch one ad by its id.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and routes tool
/// calls to the [`ToolDispatcher`].
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher shared by all tool calls.
    dispatcher: Arc<ToolDispatcher>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if an upstream base URL is not a valid absolute URL.
    pub fn new(config: Config) -> Result<Self> {
        let dispatcher = ToolDispatcher::new(&config)?;

        Ok(Self {
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Call a tool by name and wrap the outcome in the MCP envelope.
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatcher
            .invoke(name, arguments.unwrap_or_default())
            .await
            .map(|result| result.into_call_tool_result())
            .map_err(|e| {
                error!("Tool '{}' failed: {}", name, e);
                to_protocol_error(e)
            })
    }
}

/// Translate a tool error into an MCP error.
fn to_protocol_error(err: ToolError) -> McpError {
    match err {
        ToolError::UnknownTool(_) => {
            McpError::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
        }
        other => McpError::internal_error(format!("Failed to fetch data: {}", other), None),
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        self.call(&request.name, request.arguments).await
    }
}
