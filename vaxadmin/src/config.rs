//! # Configuration Module
//!
//! This module handles loading and validating client configuration from
//! environment variables. All settings are centralized here.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ClientConfig::from_env()?;
//! println!("Base URL: {}", config.base_url);
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Description | Example |
//! |----------|-------------|---------|
//! | `VAXADMIN_BASE_URL` | API base URL for the selected environment | `http://221.224.159.213:9999/unImmunePlan` |
//! | `VAXADMIN_TIMEOUT_SECS` | Request timeout in seconds | `1500` |

use std::env;
use std::time::Duration;
use thiserror::Error;

/// The development backend base URL, used when no environment override is set.
pub const DEV_BASE_URL: &str = "http://221.224.159.213:9999/unImmunePlan";

/// Default request timeout in seconds.
///
/// The original client allowed very long-running report exports, so the
/// timeout is deliberately generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 1500;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is missing
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// Failed to parse a value
    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

/// Client configuration loaded from environment variables.
///
/// The API base is environment-selected: production deployments set
/// `VAXADMIN_BASE_URL`, development falls back to [`DEV_BASE_URL`].
///
/// ## Example
///
/// ```rust,ignore
/// let config = ClientConfig::from_env()?; // Loads .env first
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined onto.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEV_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, so local
    /// overrides work without exporting anything.
    ///
    /// ## Returns
    ///
    /// - `Ok(ClientConfig)` - Configuration loaded successfully
    /// - `Err(ConfigError)` - A variable has an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let timeout_secs: u64 = get_env_or_default(
            "VAXADMIN_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .map_err(|e| ConfigError::ParseError("VAXADMIN_TIMEOUT_SECS".to_string(), format!("{}", e)))?;

        Ok(Self {
            base_url: get_env_or_default("VAXADMIN_BASE_URL", DEV_BASE_URL),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Get a required environment variable.
///
/// Returns an error if the variable is not set.
#[allow(dead_code)]
fn get_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
///
/// Returns the default if the variable is not set.
fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_or_default() {
        // Should return default when not set
        let value = get_env_or_default("NONEXISTENT_VAR_12345", "default_value");
        assert_eq!(value, "default_value");
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEV_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(1500));
    }
}
