//! Tool-specific error types.

use std::fmt;

use thiserror::Error;

/// Upstream HTTP service a tool delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamService {
    /// The MoteurImmo listings API.
    Listings,
    /// The national address-lookup API.
    Address,
}

impl fmt::Display for UpstreamService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listings => f.write_str("MoteurImmo"),
            Self::Address => f.write_str("Adresse Gouv"),
        }
    }
}

/// Errors that can occur during tool operations.
///
/// Non-200 statuses and transport failures share the `Upstream` kind: from
/// the caller's point of view both mean the data could not be obtained.
/// `status` is only kept so that logs and tests can tell them apart.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not part of the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments do not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream call failed or answered with a non-200 status.
    #[error("{service} API error: {message}")]
    Upstream {
        service: UpstreamService,
        status: Option<u16>,
        message: String,
    },

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create an upstream error for an HTTP status other than 200.
    pub fn upstream_status(
        service: UpstreamService,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Self::Upstream {
            service,
            status: Some(status),
            message: message.into(),
        }
    }

    /// Create an upstream error for a failure below HTTP (connect, timeout,
    /// unreadable body).
    pub fn upstream_transport(service: UpstreamService, message: impl Into<String>) -> Self {
        Self::Upstream {
            service,
            status: None,
            message: message.into(),
        }
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status reported by the upstream, if the call got that far.
    pub fn upstream_status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}
