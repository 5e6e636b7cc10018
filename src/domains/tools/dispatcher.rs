//! Tool Dispatcher - runs a tool call against its upstream service.
//!
//! Every failure is returned as a [`ToolError`]; turning it into a protocol
//! error is left to the server handler.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde_json::Value;
use tracing::{instrument, warn};

use super::definitions::common::{parse_params, render_payload};
use super::definitions::{CityInseeCodeTool, GetAdTool, SearchAdsTool};
use super::error::ToolError;
use super::registry::ToolKind;
use super::upstream::{AddressClient, ListingsClient};
use crate::core::config::Config;

/// Successful outcome of a tool call: one pretty-printed JSON text block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    text: String,
}

impl InvocationResult {
    /// Render a payload for delivery.
    pub fn from_payload(payload: &Value) -> Result<Self, ToolError> {
        Ok(Self {
            text: render_payload(payload)?,
        })
    }

    /// The rendered JSON text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Wrap into the MCP success envelope.
    pub fn into_call_tool_result(self) -> CallToolResult {
        CallToolResult::success(vec![Content::text(self.text)])
    }
}

/// Dispatches tool calls to the upstream clients.
///
/// The clients, and the API key they carry, are built once from the
/// configuration and only read afterwards, so one dispatcher is shared by
/// all concurrent calls.
#[derive(Debug, Clone)]
pub struct ToolDispatcher {
    listings: ListingsClient,
    address: AddressClient,
}

impl ToolDispatcher {
    /// Build the dispatcher and its upstream clients.
    pub fn new(config: &Config) -> Result<Self, ToolError> {
        Ok(Self {
            listings: ListingsClient::new(config)?,
            address: AddressClient::new(config)?,
        })
    }

    /// Run the tool `name` with raw `arguments`.
    ///
    /// Unknown names fail with [`ToolError::UnknownTool`] before anything is
    /// sent upstream.
    #[instrument(skip(self, arguments))]
    pub async fn invoke(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<InvocationResult, ToolError> {
        let Some(kind) = ToolKind::from_name(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::unknown_tool(name));
        };

        let payload = match kind {
            ToolKind::SearchAds => {
                SearchAdsTool::execute(&self.listings, &parse_params(arguments)?).await?
            }
            ToolKind::GetAd => GetAdTool::execute(&self.listings, &parse_params(arguments)?).await?,
            ToolKind::SearchCityInseeCode => {
                CityInseeCodeTool::execute(&self.address, &parse_params(arguments)?).await?
            }
        };

        InvocationResult::from_payload(&payload)
    }
}
