//! City to INSEE code lookup tool.
//!
//! Queries the national address-lookup API. Its response shape is not
//! modeled: the body is handed back to the client untouched, and the client
//! picks the `citycode` it needs from the returned features.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domains::tools::error::{ToolError, UpstreamService};
use crate::domains::tools::upstream::{AddressClient, read_json, reason_phrase, transport_error};

/// Parameters for a city lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CityInseeCodeParams {
    /// The name of the city to search for
    pub query: String,
}

/// City to INSEE code lookup tool.
#[derive(Debug, Clone)]
pub struct CityInseeCodeTool;

impl CityInseeCodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_city_insee_code";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for the INSEE code of a city by name. \
         Returns the raw address-lookup results; use the INSEE code in the \
         `location` filter of search_ads.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CityInseeCodeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Fetch `GET /search/?q={query}` and return the whole body.
    pub async fn execute(
        client: &AddressClient,
        params: &CityInseeCodeParams,
    ) -> Result<Value, ToolError> {
        let url = client.endpoint(&["search", ""])?;

        info!("Searching INSEE code for city: {}", params.query);

        let response = client
            .http()
            .get(url)
            .query(&[("q", params.query.as_str())])
            .send()
            .await
            .map_err(|e| transport_error(UpstreamService::Address, e))?;

        let status = response.status();
        debug!("Address lookup answered {}", status);

        if status != reqwest::StatusCode::OK {
            return Err(ToolError::upstream_status(
                UpstreamService::Address,
                status.as_u16(),
                reason_phrase(status),
            ));
        }

        read_json(UpstreamService::Address, response).await
    }
}
