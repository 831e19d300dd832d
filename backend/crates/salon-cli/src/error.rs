use salon_client::{ClientError, Route};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] salon_config::ConfigError),

    #[error("{}", .0.user_message())]
    Client(#[from] ClientError),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Access denied, redirect to {}", route.path())]
    Redirect { route: Route },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
