//! User record as persisted in the credential document.

use crate::{PublicUser, UserRole};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full user record, including the password hash.
///
/// This type never leaves the server: responses carry [`PublicUser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stringified positive integer
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string. Older documents may still hold plaintext here.
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Numeric value of the id, if it is one
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }

    /// Case-insensitive email comparison
    pub fn has_email(&self, email: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim())
    }

    /// Copy of this user with the password removed
    pub fn to_public(&self) -> PublicUser {
        PublicUser::from(self.clone())
    }
}
