mod auth_config;
mod client_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use client_config::ClientConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "SALON_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".salon";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "db.json";

pub const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_MAX_ATTEMPTS: u32 = 10;
const DEFAULT_WINDOW_SECS: u64 = 60;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_LOG_DIRECTORY: &str = "log";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";
const DEFAULT_CLIENT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_VALIDATOR_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_TOKEN_FILE: &str = "auth_token";

#[cfg(test)]
mod tests;
