use std::panic::Location;
use std::path::PathBuf;
use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced to callers of the salon API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request timed out after {ms}ms {location}")]
    Timeout { ms: u64, location: ErrorLocation },

    #[error("Connection error: {message} {location}")]
    Connection {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid {field}: {message} {location}")]
    InvalidInput {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token storage error at {path}: {source} {location}")]
    Storage {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Classify a transport failure, keeping timeouts distinct from refused connections
    #[track_caller]
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if err.is_timeout() {
            return ClientError::Timeout {
                ms: timeout.as_millis() as u64,
                location,
            };
        }

        if err.is_connect() {
            return ClientError::Connection {
                message: err.to_string(),
                location,
                source: err,
            };
        }

        ClientError::Http {
            message: err.to_string(),
            location,
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ClientError::Storage {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn rejected(message: impl Into<String>) -> Self {
        ClientError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        ClientError::MalformedResponse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        ClientError::InvalidInput {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message fit for showing to a person, without source locations
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Timeout { ms, .. } => format!("Request timed out after {ms}ms"),
            ClientError::Connection { message, .. } => format!("Connection error: {message}"),
            ClientError::Http { message, .. } => message.clone(),
            ClientError::Api { message, .. }
            | ClientError::Unauthorized { message, .. }
            | ClientError::MalformedResponse { message, .. }
            | ClientError::Rejected { message, .. }
            | ClientError::InvalidInput { message, .. } => message.clone(),
            ClientError::Storage { source, .. } => format!("Token storage error: {source}"),
            ClientError::Json { message, .. } => message.clone(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
