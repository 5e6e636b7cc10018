//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that is
//! populated from environment variables (and an optional `.env` file) on top
//! of built-in defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default base URL of the MoteurImmo listings API.
pub const DEFAULT_LISTINGS_BASE_URL: &str = "https://moteurimmo.fr/api";

/// Default base URL of the national address-lookup API.
pub const DEFAULT_ADDRESS_BASE_URL: &str = "https://api-adresse.data.gouv.fr";

/// Default timeout applied to every upstream HTTP call.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,

    /// Upstream HTTP services configuration.
    pub upstream: UpstreamConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// MoteurImmo API key, sent as the `token` body field on searches and as
    /// the `apiKey` header on single-ad lookups.
    pub moteur_immo_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "moteur_immo_api_key",
                &self.moteur_immo_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Addresses and limits of the upstream HTTP services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the listings API (`/ads` and `/ad/{id}` live below it).
    pub listings_base_url: String,

    /// Base URL of the address-lookup API (`/search/` lives below it).
    pub address_base_url: String,

    /// Timeout in seconds, shared by both upstream services.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            listings_base_url: DEFAULT_LISTINGS_BASE_URL.to_string(),
            address_base_url: DEFAULT_ADDRESS_BASE_URL.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "moteurimmo-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            credentials: CredentialsConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings are prefixed with `MCP_` (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_LISTINGS_BASE_URL`, ...). The listings credential
    /// is read from `MOTEUR_IMMO_API_KEY`.
    ///
    /// Nothing is logged here since logging is not initialized yet; call
    /// [`Config::log_startup_warnings`] once it is.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.credentials.moteur_immo_api_key = std::env::var("MOTEUR_IMMO_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        if let Ok(url) = std::env::var("MCP_LISTINGS_BASE_URL") {
            config.upstream.listings_base_url = url;
        }

        if let Ok(url) = std::env::var("MCP_ADDRESS_BASE_URL") {
            config.upstream.address_base_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = timeout
                .parse()
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS);
        }

        config
    }

    /// Report configuration problems that do not prevent startup.
    pub fn log_startup_warnings(&self) {
        if self.credentials.moteur_immo_api_key.is_some() {
            info!("MoteurImmo API key loaded from environment");
        } else {
            warn!(
                "MOTEUR_IMMO_API_KEY environment variable is not set. \
                 Listing searches will be rejected by the MoteurImmo API."
            );
        }

        info!(
            "Upstreams: listings={}, address={} (timeout {}s)",
            self.upstream.listings_base_url,
            self.upstream.address_base_url,
            self.upstream.timeout_secs
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MOTEUR_IMMO_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.credentials.moteur_immo_api_key.as_deref(),
            Some("test_key_12345")
        );
        unsafe {
            std::env::remove_var("MOTEUR_IMMO_API_KEY");
        }
    }

    #[test]
    fn test_missing_credentials_still_loads() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MOTEUR_IMMO_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.credentials.moteur_immo_api_key.is_none());
    }

    #[test]
    fn test_blank_credentials_treated_as_missing() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MOTEUR_IMMO_API_KEY", "   ");
        }
        let config = Config::from_env();
        assert!(config.credentials.moteur_immo_api_key.is_none());
        unsafe {
            std::env::remove_var("MOTEUR_IMMO_API_KEY");
        }
    }

    #[test]
    fn test_upstream_overrides_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LISTINGS_BASE_URL", "http://localhost:9000/api");
            std::env::set_var("MCP_UPSTREAM_TIMEOUT_SECS", "not-a-number");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.listings_base_url, "http://localhost:9000/api");
        assert_eq!(config.upstream.address_base_url, DEFAULT_ADDRESS_BASE_URL);
        assert_eq!(config.upstream.timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
        unsafe {
            std::env::remove_var("MCP_LISTINGS_BASE_URL");
            std::env::remove_var("MCP_UPSTREAM_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            moteur_immo_api_key: Some("super_secret_key".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_default_upstreams() {
        let config = Config::default();
        assert_eq!(config.upstream.listings_base_url, "https://moteurimmo.fr/api");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert!(config.credentials.moteur_immo_api_key.is_none());
    }
}
