use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use error_location::ErrorLocation;

/// Outcome of checking a plaintext password against a stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    /// Matched an Argon2 hash
    Valid,
    /// Matched a legacy plaintext record; caller should re-hash and persist
    ValidLegacy,
    Invalid,
}

impl PasswordCheck {
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Hash a password with Argon2id into a PHC string
#[track_caller]
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

pub fn verify_password(plain: &str, stored: &str) -> PasswordCheck {
    match PasswordHash::new(stored) {
        Ok(parsed) => {
            if Argon2::default()
                .verify_password(plain.as_bytes(), &parsed)
                .is_ok()
            {
                PasswordCheck::Valid
            } else {
                PasswordCheck::Invalid
            }
        }
        // Not a PHC string: records written before hashing was introduced
        Err(_) if !stored.is_empty() && stored == plain => PasswordCheck::ValidLegacy,
        Err(_) => PasswordCheck::Invalid,
    }
}

/// True when the stored value is a PHC-formatted hash
pub fn is_password_hash(stored: &str) -> bool {
    PasswordHash::new(stored).is_ok()
}
