//! Common utilities shared across tool definitions.
//!
//! Response narrowing, error-body parsing and argument decoding.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domains::tools::error::ToolError;

/// Decode a tool's raw arguments into its typed parameters.
pub fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Narrow a listings response to its `ads` field.
///
/// The field is returned as-is. A body without it yields `null` rather than
/// an error, since the upstream owns the shape.
pub fn extract_ads(mut body: Value) -> Value {
    body.get_mut("ads").map(Value::take).unwrap_or(Value::Null)
}

/// The `error` field of an upstream error body, if present.
pub fn body_error_message(body: &Value) -> Option<String> {
    match body.get("error")? {
        Value::Null => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

/// Render a payload the way it is returned to clients: pretty-printed JSON
/// with two-space indentation.
pub fn render_payload(payload: &Value) -> Result<String, ToolError> {
    serde_json::to_string_pretty(payload)
        .map_err(|e| ToolError::internal(format!("Failed to serialize result: {}", e)))
}
