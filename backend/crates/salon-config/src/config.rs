use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ClientConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. SALON_CONFIG_DIR env var, else ./.salon/
    /// 2. Auto-create the config directory
    /// 3. config.toml if present, else defaults
    /// 4. SALON_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: SALON_CONFIG_DIR env var > ./.salon/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Validate every section. Call after load() to fail fast at startup.
    ///
    /// A missing `auth.jwt_secret` is not an error here; the server asks for
    /// it through [`AuthConfig::jwt_secret`].
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.client.validate()?;

        if self.logging.file.as_deref().is_some_and(|f| f.contains("..")) {
            return Err(ConfigError::logging("logging.file cannot contain '..'"));
        }

        Ok(())
    }

    /// Absolute path to the JSON document
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the client's token file
    pub fn token_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.client.token_file))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.auth.token_ttl_secs)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: jwt_secret {}, token ttl {}s, {} attempts/{}s",
            if self.auth.jwt_secret.is_some() {
                "set"
            } else {
                "missing"
            },
            self.auth.token_ttl_secs,
            self.auth.max_attempts,
            self.auth.window_secs
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  client: {} (timeout {}ms, validator {}ms)",
            self.client.api_url, self.client.timeout_ms, self.client.validator_timeout_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SALON_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SALON_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("SALON_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("SALON_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("SALON_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_parse("SALON_AUTH_MAX_ATTEMPTS", &mut self.auth.max_attempts);
        Self::apply_env_parse("SALON_AUTH_WINDOW_SECS", &mut self.auth.window_secs);

        // Logging
        Self::apply_env_parse("SALON_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SALON_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SALON_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("SALON_LOG_DIR", &mut self.logging.dir);

        // Client
        Self::apply_env_string("SALON_API_URL", &mut self.client.api_url);
        Self::apply_env_parse("SALON_CLIENT_TIMEOUT_MS", &mut self.client.timeout_ms);
        Self::apply_env_parse(
            "SALON_VALIDATOR_TIMEOUT_MS",
            &mut self.client.validator_timeout_ms,
        );
        Self::apply_env_string("SALON_TOKEN_FILE", &mut self.client.token_file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
