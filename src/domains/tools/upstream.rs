//! HTTP clients for the upstream services.
//!
//! Both clients are built once at server construction and shared by every
//! tool call. They only know how to reach their service; interpreting
//! responses is left to the tool definitions, since each endpoint has its
//! own success and error contract.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

use super::error::{ToolError, UpstreamService};
use crate::core::config::{Config, UpstreamConfig};

const JSON_MIME: &str = "application/json";

/// Client for the MoteurImmo listings API.
#[derive(Debug, Clone)]
pub struct ListingsClient {
    http: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl ListingsClient {
    /// Build the client from the server configuration.
    pub fn new(config: &Config) -> Result<Self, ToolError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));

        let http = Client::builder()
            .timeout(timeout(&config.upstream))
            .default_headers(headers)
            .build()
            .map_err(|e| ToolError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: parse_base_url(&config.upstream.listings_base_url)?,
            api_key: config.credentials.moteur_immo_api_key.clone(),
        })
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// The configured API key, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// URL of an endpoint below the base URL. Each segment is
    /// percent-encoded, so caller-provided ids cannot change the path.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ToolError> {
        join_segments(&self.base_url, segments)
    }
}

/// Client for the national address-lookup API. No credential is attached.
#[derive(Debug, Clone)]
pub struct AddressClient {
    http: Client,
    base_url: Url,
}

impl AddressClient {
    /// Build the client from the server configuration.
    pub fn new(config: &Config) -> Result<Self, ToolError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME));

        let http = Client::builder()
            .timeout(timeout(&config.upstream))
            .default_headers(headers)
            .build()
            .map_err(|e| ToolError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: parse_base_url(&config.upstream.address_base_url)?,
        })
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// URL of an endpoint below the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ToolError> {
        join_segments(&self.base_url, segments)
    }
}

fn timeout(config: &UpstreamConfig) -> Duration {
    Duration::from_secs(config.timeout_secs)
}

fn parse_base_url(raw: &str) -> Result<Url, ToolError> {
    let url = Url::parse(raw)
        .map_err(|e| ToolError::internal(format!("Invalid base URL '{}': {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ToolError::internal(format!(
            "Invalid base URL '{}': cannot be a base",
            raw
        )));
    }
    Ok(url)
}

fn join_segments(base: &Url, segments: &[&str]) -> Result<Url, ToolError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ToolError::internal(format!("Base URL '{}' cannot be a base", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Reason phrase for a status, falling back to the numeric code.
pub fn reason_phrase(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

/// Map a transport-level failure to the unified upstream error.
pub fn transport_error(service: UpstreamService, err: reqwest::Error) -> ToolError {
    let message = if err.is_timeout() {
        "Request timed out".to_string()
    } else if err.is_connect() {
        format!("Connection failed: {}", err)
    } else {
        err.to_string()
    };
    ToolError::upstream_transport(service, message)
}

/// Read a successful response body as JSON.
pub async fn read_json(
    service: UpstreamService,
    response: reqwest::Response,
) -> Result<Value, ToolError> {
    response.json::<Value>().await.map_err(|e| {
        ToolError::upstream_transport(service, format!("Invalid JSON response body: {}", e))
    })
}
