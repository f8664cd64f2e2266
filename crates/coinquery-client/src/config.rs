//! Configuration management for the coinquery client

use coinquery_types::address::{validate_prefix, DEFAULT_ACCOUNT_PREFIX};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Node gRPC endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "127.0.0.1:9090";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O error
    #[error("io error:: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("toml parsing error:: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value is present but unusable
    #[error("invalid value for {key}:: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl From<ConfigError> for coinquery_errors::Error {
    fn from(err: ConfigError) -> Self {
        coinquery_errors::Error::Config(err.to_string())
    }
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Node gRPC endpoint as host:port
    pub endpoint: String,
    /// Expected bech32 prefix of account addresses
    pub address_prefix: String,
    /// Timeout for establishing the connection, transport default when unset
    pub connect_timeout_secs: Option<u64>,
    /// Deadline for the balance query, none when unset
    pub request_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            address_prefix: DEFAULT_ACCOUNT_PREFIX.to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply command line overrides on top of the loaded values
    pub fn with_overrides(mut self, endpoint: Option<String>, prefix: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(prefix) = prefix {
            self.address_prefix = prefix;
        }
        self
    }

    /// Reject values that could never produce a working query
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::Invalid {
                key: "endpoint",
                reason: "must not be empty".to_string(),
            });
        }
        if endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "endpoint",
                reason: "tls endpoints are not supported".to_string(),
            });
        }

        validate_prefix(&self.address_prefix).map_err(|e| ConfigError::Invalid {
            key: "address_prefix",
            reason: e.to_string(),
        })?;

        if self.connect_timeout_secs == Some(0) || self.request_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid {
                key: "timeout",
                reason: "timeouts must be at least one second".to_string(),
            });
        }

        Ok(())
    }

    /// Endpoint as a URI the transport accepts
    pub fn endpoint_uri(&self) -> String {
        let endpoint = self.endpoint.trim();
        if endpoint.starts_with("http://") {
            endpoint.to_string()
        } else {
            format!("http://{endpoint}")
        }
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
