//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Server initialization error (the MCP handshake failed).
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// Service error from rmcp while serving requests.
    #[error("Service error: {0}")]
    ServiceError(String),
}

impl TransportError {
    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    /// Create a service error.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TransportError::init("handshake aborted").to_string(),
            "Server initialization error: handshake aborted"
        );
        assert_eq!(
            TransportError::service("task panicked").to_string(),
            "Service error: task panicked"
        );
    }
}
