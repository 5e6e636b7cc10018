//! MoteurImmo single ad lookup tool.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::domains::tools::definitions::common::extract_ads;
use crate::domains::tools::error::{ToolError, UpstreamService};
use crate::domains::tools::upstream::{ListingsClient, read_json, reason_phrase, transport_error};

/// Parameters for a single ad lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAdParams {
    /// Ad ID
    pub id: String,
}

/// MoteurImmo single ad lookup tool.
#[derive(Debug, Clone)]
pub struct GetAdTool;

impl GetAdTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_ad";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get one real estate ad by ID from MoteurImmo. \
         Returns the full ad as JSON, including publisher, price, location, energy grades \
         and duplicates found on other portals.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAdParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Fetch `GET /ad/{id}` and return the `ads` field of the response.
    ///
    /// Unlike the search endpoint, this one takes the API key as an `apiKey`
    /// header, and failures are reported with the HTTP status text only.
    pub async fn execute(client: &ListingsClient, params: &GetAdParams) -> Result<Value, ToolError> {
        let url = client.endpoint(&["ad", &params.id])?;

        info!("Fetching ad for id: {}", params.id);

        let mut request = client.http().get(url);
        if let Some(key) = client.api_key() {
            request = request.header("apiKey", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(UpstreamService::Listings, e))?;

        let status = response.status();
        debug!("MoteurImmo /ad answered {}", status);

        if status != reqwest::StatusCode::OK {
            return Err(ToolError::upstream_status(
                UpstreamService::Listings,
                status.as_u16(),
                reason_phrase(status),
            ));
        }

        let body = read_json(UpstreamService::Listings, response).await?;
        Ok(extract_ads(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_require_id() {
        let params: GetAdParams = serde_json::from_str(r#"{"id": "abc123"}"#).unwrap();
        assert_eq!(params.id, "abc123");
        assert!(serde_json::from_str::<GetAdParams>("{}").is_err());
        assert!(serde_json::from_str::<GetAdParams>(r#"{"id": 42}"#).is_err());
    }

    #[test]
    fn test_schema_requires_id() {
        let tool = GetAdTool::to_tool();
        assert_eq!(tool.name, "get_ad");
        assert_eq!(tool.input_schema["required"], serde_json::json!(["id"]));
        assert_eq!(tool.input_schema["properties"]["id"]["type"], "string");
    }
}
