use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_API_URL, DEFAULT_CLIENT_TIMEOUT_MS,
    DEFAULT_TOKEN_FILE, DEFAULT_VALIDATOR_TIMEOUT_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// Settings for the API consumer side
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_url: String,
    /// Timeout for general API calls
    pub timeout_ms: u64,
    /// Timeout for credential checks
    pub validator_timeout_ms: u64,
    /// Token file name, relative to the config dir
    pub token_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: String::from(DEFAULT_API_URL),
            timeout_ms: DEFAULT_CLIENT_TIMEOUT_MS,
            validator_timeout_ms: DEFAULT_VALIDATOR_TIMEOUT_MS,
            token_file: String::from(DEFAULT_TOKEN_FILE),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::client(format!(
                "client.api_url must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        if self.timeout_ms == 0 || self.validator_timeout_ms == 0 {
            return Err(ConfigError::client(
                "client.timeout_ms and client.validator_timeout_ms must be > 0",
            ));
        }

        if self.token_file.trim().is_empty() || self.token_file.contains("..") {
            return Err(ConfigError::client(
                "client.token_file must be a non-empty name without '..'",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn validator_timeout(&self) -> Duration {
        Duration::from_millis(self.validator_timeout_ms)
    }
}
