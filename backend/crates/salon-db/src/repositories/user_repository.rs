//! User records inside `auth.users`.
//!
//! Lookups read the current file. `insert` and `update_password` run under
//! the store's writer lock, so the duplicate-email check and id assignment
//! see every earlier write.

use crate::{DbError, JsonStore, Result as DbErrorResult};

use salon_core::{NewUser, User, normalize_email};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;

#[derive(Clone)]
pub struct UserRepository {
    store: Arc<JsonStore>,
}

impl UserRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Case-insensitive, whitespace-tolerant lookup
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let document = self.store.read().await?;

        Ok(document
            .auth
            .users
            .into_iter()
            .find(|user| user.has_email(email)))
    }

    pub async fn find_by_id(&self, id: &str) -> DbErrorResult<Option<User>> {
        let document = self.store.read().await?;

        Ok(document.auth.users.into_iter().find(|user| user.id == id))
    }

    /// Append a user, assigning the id and timestamps.
    ///
    /// Fails with [`DbError::DuplicateEmail`] without touching the file when
    /// the email is already registered.
    pub async fn insert(&self, new_user: NewUser) -> DbErrorResult<User> {
        let user = self
            .store
            .update(move |document| {
                let email = normalize_email(&new_user.email);

                if document.auth.users.iter().any(|user| user.has_email(&email)) {
                    return Err(DbError::DuplicateEmail {
                        email,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }

                let now = Utc::now();
                let user = User {
                    id: document.next_user_id().to_string(),
                    name: new_user.name,
                    email,
                    password: new_user.password_hash,
                    role: new_user.role,
                    created_at: now,
                    updated_at: now,
                };

                document.auth.users.push(user.clone());
                Ok(user)
            })
            .await?;

        log::info!("Inserted user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Replace the stored password hash. Returns `None` if the user is gone.
    pub async fn update_password(
        &self,
        id: &str,
        password_hash: String,
    ) -> DbErrorResult<Option<User>> {
        self.store
            .update(|document| {
                Ok(document
                    .auth
                    .users
                    .iter_mut()
                    .find(|user| user.id == id)
                    .map(|user| {
                        user.password = password_hash;
                        user.updated_at = Utc::now();
                        user.clone()
                    }))
            })
            .await
    }

    pub async fn count(&self) -> DbErrorResult<usize> {
        Ok(self.store.read().await?.users().len())
    }
}
