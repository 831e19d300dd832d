use crate::{CoreError, CoreResult, UserRole, normalize_email};

use std::panic::Location;

use error_location::ErrorLocation;

/// Input for inserting a user. Id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl NewUser {
    /// Build a signup record with the default role.
    ///
    /// Name is trimmed and the email normalized; both must be non-empty.
    #[track_caller]
    pub fn new(name: &str, email: &str, password_hash: String) -> CoreResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Validation {
                message: "name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let email = normalize_email(email);
        if email.is_empty() {
            return Err(CoreError::Validation {
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            name: name.to_string(),
            email,
            password_hash,
            role: UserRole::default(),
        })
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }
}
