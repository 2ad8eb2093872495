//! Server configuration from the environment

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default host address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port number
pub const DEFAULT_PORT: u16 = 8080;

/// Default source dataset
pub const DEFAULT_DATA_PATH: &str = geosuggest_core::loader::DEFAULT_SOURCE;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Path of the tab-delimited source (plain or `.gz`)
    pub data_path: String,

    /// Enable per-request trace logging
    pub enable_logging: bool,

    /// Log level for tracing
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: DEFAULT_DATA_PATH.to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load config from environment variables with fallback to defaults
    ///
    /// Environment variables:
    /// - `GEOSUGGEST_HOST` - Server host
    /// - `GEOSUGGEST_PORT` - Server port
    /// - `GEOSUGGEST_DATA_PATH` - Source dataset path
    /// - `GEOSUGGEST_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("GEOSUGGEST_HOST") {
            config.host = host;
        }

        if let Some(port) = lookup("GEOSUGGEST_PORT").and_then(|p| p.parse::<u16>().ok()) {
            config.port = port;
        }

        if let Some(path) = lookup("GEOSUGGEST_DATA_PATH") {
            config.data_path = path;
        }

        if let Some(level) = lookup("GEOSUGGEST_LOG_LEVEL") {
            config.log_level = level;
        }

        config
    }

    /// Get the socket address for the server
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {}", e))
    }

    /// Get the full server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.data_path.is_empty() {
            return Err("Data path cannot be empty".to_string());
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log level: {}. Must be one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
