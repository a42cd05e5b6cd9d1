//! Environment-based Configuration
//!
//! All settings are optional and default to the values the tools were
//! built around (a key server on localhost and a players file in the
//! working directory). A `.env` file is honored if present.
//!
//! # Environment Variables
//!
//! - `KEYSEED_API_URL` - key server base URL (default: `http://localhost:8080`)
//! - `KEYSEED_PLAYERS_FILE` - players file path (default: `players.json`)
//! - `KEYSEED_LOG_LEVEL` - log level: trace, debug, info, warn, error (default: info)

use std::env;
use thiserror::Error;

use crate::api::DEFAULT_URL;

/// Default players file path, relative to the working directory
pub const DEFAULT_PLAYERS_FILE: &str = "players.json";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Tool configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Key server base URL
    pub api_url: String,
    /// Path to the players key file
    pub players_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_URL.to_string(),
            players_file: DEFAULT_PLAYERS_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = env::var("KEYSEED_API_URL") {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue(
                    "KEYSEED_API_URL".to_string(),
                    format!("not an http(s) URL: {}", url),
                ));
            }
            config.api_url = url;
        }

        if let Ok(path) = env::var("KEYSEED_PLAYERS_FILE") {
            if path.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "KEYSEED_PLAYERS_FILE".to_string(),
                    "empty path".to_string(),
                ));
            }
            config.players_file = path;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.players_file, "players.json");
    }
}
