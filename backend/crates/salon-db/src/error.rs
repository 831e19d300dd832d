use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("I/O error on {path}: {source} {location}")]
    Io {
        path: String,
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Document serialization failed: {source} {location}")]
    Json {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Document at {path} is unreadable: {message} {location}")]
    Corrupt {
        path: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Email already registered: {email} {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error("Background write failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
