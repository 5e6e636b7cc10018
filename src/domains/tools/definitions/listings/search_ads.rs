//! MoteurImmo ad search tool.
//!
//! Forwards the caller's filters to `POST /ads` with the API key injected as
//! the `token` body field, and returns the `ads` array of the response.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::{JsonSchema, Schema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value, json};
use tracing::{debug, info};

use super::constants::{
    AdOption, AdType, Category, Grade, KeywordsOperator, Portal, PublisherType, SortKey,
};
use crate::domains::tools::definitions::common::{body_error_message, extract_ads};
use crate::domains::tools::error::{ToolError, UpstreamService};
use crate::domains::tools::upstream::{ListingsClient, read_json, reason_phrase, transport_error};

// ============================================================================
// Tool Parameters
// ============================================================================

/// A search zone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    /// INSEE Code of the City
    pub insee_code: String,
}

/// Filters for an ad search. Every field is optional and only the fields the
/// caller supplied are forwarded; the schema defaults are advisory.
///
/// Fields not declared here are forwarded as given, except `token`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(transform = advertise_defaults)]
pub struct SearchAdsParams {
    /// List of real estate platform names to include in the search
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origins: Option<Vec<Portal>>,

    /// Sort by field (e.g. lastEventDate, creationDate, price) and direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,

    /// Creation date before (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_before: Option<String>,
    /// Creation date after (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_after: Option<String>,
    /// Deletion date before (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_date_before: Option<String>,
    /// Deletion date after (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_date_after: Option<String>,
    /// Last price change date before (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_price_change_date_before: Option<String>,
    /// Last price change date after (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_price_change_date_after: Option<String>,
    /// Last publication date before (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_publication_date_before: Option<String>,
    /// Last publication date after (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_publication_date_after: Option<String>,
    /// Last event date before (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event_date_before: Option<String>,
    /// Last event date after (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_event_date_after: Option<String>,
    /// Last change date before (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_change_date_before: Option<String>,
    /// Last change date after (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_change_date_after: Option<String>,
    /// Last merge date before (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_merge_date_before: Option<String>,
    /// Last merge date after (ISO 8601 date)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_merge_date_after: Option<String>,

    /// Sales or rentals type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<AdType>>,

    /// Property categories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,

    /// List of advertiser types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher_types: Option<Vec<PublisherType>>,

    /// List of search zones (use search_city_insee_code to find INSEE codes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<LocationFilter>>,

    /// Search radius in km
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<Number>,

    /// Minimum price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<Number>,
    /// Maximum price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<Number>,
    /// Minimum price per square meter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_square_meter_min: Option<Number>,
    /// Maximum price per square meter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_square_meter_max: Option<Number>,
    /// Minimum rent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_min: Option<Number>,
    /// Maximum rent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent_max: Option<Number>,
    /// Minimum property charges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_charges_min: Option<Number>,
    /// Maximum property charges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_charges_max: Option<Number>,
    /// Minimum property tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_tax_min: Option<Number>,
    /// Maximum property tax
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_tax_max: Option<Number>,
    /// Minimum number of rooms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms_min: Option<Number>,
    /// Maximum number of rooms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rooms_max: Option<Number>,
    /// Minimum number of bedrooms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms_min: Option<Number>,
    /// Maximum number of bedrooms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms_max: Option<Number>,
    /// Minimum surface area in m²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_min: Option<Number>,
    /// Maximum surface area in m²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface_max: Option<Number>,
    /// Minimum land surface area in m²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_surface_min: Option<Number>,
    /// Maximum land surface area in m²
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land_surface_max: Option<Number>,
    /// Minimum construction year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_year_min: Option<Number>,
    /// Maximum construction year
    #[serde(skip_serializing_if = "Option::is_none")]
    pub construction_year_max: Option<Number>,
    /// Minimum floor number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_min: Option<Number>,
    /// Maximum floor number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_max: Option<Number>,
    /// Minimum number of floors in the building
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_floors_min: Option<Number>,
    /// Maximum number of floors in the building
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_floors_max: Option<Number>,

    /// DPE energy grade min (cannot be used with land category)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_grade_min: Option<Grade>,
    /// DPE energy grade max (cannot be used with land category)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_grade_max: Option<Grade>,
    /// Gas grade min (cannot be used with land category)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_grade_min: Option<Grade>,
    /// Gas grade max (cannot be used with land category)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_grade_max: Option<Grade>,

    /// Options for the ad
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<AdOption>>,

    /// Keywords to search in the ad title and description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// Keyword search operator (AND or OR)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords_operator: Option<KeywordsOperator>,

    /// Include ad history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_history: Option<bool>,

    /// Include negotiation analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_negotiation_analysis: Option<bool>,

    /// Filters without a declared field, passed through to the API.
    #[serde(flatten)]
    #[schemars(skip)]
    pub extra: Map<String, Value>,
}

/// Publish the API-side defaults in the discovery schema.
fn advertise_defaults(schema: &mut Schema) {
    let Some(properties) = schema
        .as_object_mut()
        .and_then(|root| root.get_mut("properties"))
        .and_then(Value::as_object_mut)
    else {
        return;
    };

    let defaults = [
        ("origins", json!(Portal::ALL)),
        ("sortBy", json!(SortKey::DEFAULT)),
        ("types", json!(AdType::ALL)),
        ("categories", json!(Category::ALL)),
        ("publisherTypes", json!(PublisherType::ALL)),
    ];

    for (field, default) in defaults {
        if let Some(property) = properties.get_mut(field).and_then(Value::as_object_mut) {
            property.insert("default".to_string(), default);
        }
    }
}

impl SearchAdsParams {
    /// Request body for `POST /ads`: the supplied filters plus the API key.
    ///
    /// The key always comes from configuration: a caller-supplied `token` is
    /// removed, and without a configured key no `token` field is sent at all.
    pub fn to_request_body(&self, api_key: Option<&str>) -> Result<Value, ToolError> {
        let mut body = serde_json::to_value(self)
            .map_err(|e| ToolError::internal(format!("Failed to encode search filters: {}", e)))?;

        let Some(fields) = body.as_object_mut() else {
            return Err(ToolError::internal("Search filters did not encode to an object"));
        };
        fields.remove("token");
        if let Some(key) = api_key {
            fields.insert("token".to_string(), Value::String(key.to_string()));
        }

        Ok(body)
    }
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// MoteurImmo ad search tool.
#[derive(Debug, Clone)]
pub struct SearchAdsTool;

impl SearchAdsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_ads";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for real estate ads on MoteurImmo. \
         Filters cover portals, dates, transaction types, categories, locations (by INSEE code), \
         price, surface, rooms, energy grades, options and keywords. \
         Returns the matching ads as JSON.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchAdsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Run the search and return the `ads` field of the response.
    ///
    /// Only status 200 counts as success. Any other status fails with the
    /// `error` message reported in the response body.
    pub async fn execute(
        client: &ListingsClient,
        params: &SearchAdsParams,
    ) -> Result<Value, ToolError> {
        let body = params.to_request_body(client.api_key())?;
        let url = client.endpoint(&["ads"])?;

        info!("Fetching ads from {}", url);

        let response = client
            .http()
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(UpstreamService::Listings, e))?;

        let status = response.status();
        debug!("MoteurImmo /ads answered {}", status);

        if status != reqwest::StatusCode::OK {
            // The error body is best effort: fall back to the status text.
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body_error_message(&body))
                .unwrap_or_else(|| reason_phrase(status));
            return Err(ToolError::upstream_status(
                UpstreamService::Listings,
                status.as_u16(),
                message,
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
    fn test_params_camel_case() {
        let json = r#"{
            "sortBy": "price-asc",
            "types": ["sale"],
            "location": [{"inseeCode": "75056"}],
            "priceMax": 450000,
            "energyGradeMax": "D",
            "keywordsOperator": "or",
            "includeHistory": true
        }"#;
        let params: SearchAdsParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.sort_by, Some(SortKey::PriceAsc));
        assert_eq!(params.types, Some(vec![AdType::Sale]));
        assert_eq!(params.location.unwrap()[0].insee_code, "75056");
        assert_eq!(params.energy_grade_max, Some(Grade::D));
        assert_eq!(params.include_history, Some(true));
    }

    #[test]
    fn test_params_reject_out_of_schema_values() {
        assert!(serde_json::from_str::<SearchAdsParams>(r#"{"types": ["lease"]}"#).is_err());
        assert!(serde_json::from_str::<SearchAdsParams>(r#"{"priceMin": "cheap"}"#).is_err());
        assert!(serde_json::from_str::<SearchAdsParams>(r#"{"location": [{}]}"#).is_err());
    }

    #[test]
    fn test_body_forwards_only_supplied_fields() {
        let params: SearchAdsParams =
            serde_json::from_str(r#"{"priceMin": 100000, "surfaceMin": 42.5}"#).unwrap();
        let body = params.to_request_body(Some("secret")).unwrap();
        assert_eq!(
            body,
            json!({"priceMin": 100000, "surfaceMin": 42.5, "token": "secret"})
        );
        // Integers stay integers on the wire.
        assert_eq!(body["priceMin"].to_string(), "100000");
    }

    #[test]
    fn test_body_token_cannot_be_overridden() {
        let params: SearchAdsParams =
            serde_json::from_str(r#"{"token": "stolen", "rentMax": 900}"#).unwrap();

        let body = params.to_request_body(Some("secret")).unwrap();
        assert_eq!(body["token"], "secret");

        let body = params.to_request_body(None).unwrap();
        assert!(body.get("token").is_none());
        assert_eq!(body, json!({"rentMax": 900}));
    }

    #[test]
    fn test_body_forwards_undeclared_filters() {
        let params: SearchAdsParams =
            serde_json::from_str(r#"{"priceMin": 1, "departmentCode": "75"}"#).unwrap();
        assert_eq!(params.extra.get("departmentCode"), Some(&json!("75")));

        let body = params.to_request_body(Some("secret")).unwrap();
        assert_eq!(
            body,
            json!({"priceMin": 1, "departmentCode": "75", "token": "secret"})
        );
    }

    #[test]
    fn test_schema_advertises_defaults() {
        let tool = SearchAdsTool::to_tool();
        assert_eq!(tool.name, "search_ads");

        let properties = tool.input_schema["properties"].as_object().unwrap();
        assert_eq!(properties["sortBy"]["default"], "lastEventDate-desc");
        assert_eq!(properties["types"]["default"], json!(["sale", "rental"]));
        assert_eq!(
            properties["origins"]["default"].as_array().unwrap().len(),
            Portal::ALL.len()
        );
        assert!(properties["keywords"].get("default").is_none());
    }

    #[test]
    fn test_schema_has_no_required_fields() {
        let tool = SearchAdsTool::to_tool();
        let required = tool
            .input_schema
            .get("required")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        assert_eq!(required, 0);

        let properties = tool.input_schema["properties"].as_object().unwrap();
        for field in [
            "origins",
            "creationDateBefore",
            "lastMergeDateAfter",
            "publisherTypes",
            "location",
            "radius",
            "pricePerSquareMeterMin",
            "buildingFloorsMax",
            "gasGradeMin",
            "options",
            "keywordsOperator",
            "includeNegotiationAnalysis",
        ] {
            assert!(properties.contains_key(field), "missing property {field}");
        }
        assert!(!properties.contains_key("token"));
    }
}
