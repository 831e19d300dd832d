use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_ATTEMPTS, DEFAULT_TOKEN_TTL_SECS,
    DEFAULT_WINDOW_SECS, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Only the server needs it.
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    /// Login/signup attempts allowed per email per window
    pub max_attempts: u32,
    pub window_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            window_secs: DEFAULT_WINDOW_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret {
            Self::check_secret(secret)?;
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be > 0"));
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::auth("auth.max_attempts must be > 0"));
        }

        if self.window_secs == 0 {
            return Err(ConfigError::auth("auth.window_secs must be > 0"));
        }

        Ok(())
    }

    /// The signing secret, which must be configured for token issuance
    pub fn jwt_secret(&self) -> ConfigErrorResult<&str> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth(
                "auth.jwt_secret is required (set it in config.toml or SALON_AUTH_JWT_SECRET)",
            )
        })?;

        Self::check_secret(secret)?;

        Ok(secret)
    }

    fn check_secret(secret: &str) -> ConfigErrorResult<()> {
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        Ok(())
    }
}
