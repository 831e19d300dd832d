use crate::{CredentialValidator, ValidationResult};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use salon_core::{PublicUser, UserRole, normalize_email};
use tokio::sync::Mutex;

struct Account {
    user: PublicUser,
    password: String,
}

#[derive(Default)]
struct Accounts {
    users: Vec<Account>,
    /// token -> user id
    tokens: HashMap<String, String>,
}

/// Offline stand-in for the API.
///
/// Same answers as the server for duplicate emails and bad credentials;
/// tokens are opaque strings that only this instance recognises.
#[derive(Default)]
pub struct InMemoryCredentialValidator {
    accounts: Mutex<Accounts>,
    next_token: AtomicU64,
}

impl InMemoryCredentialValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register an account, e.g. staff that can't sign themselves up
    pub async fn with_user(self, name: &str, email: &str, password: &str, role: UserRole) -> Self {
        {
            let mut accounts = self.accounts.lock().await;
            let id = (accounts.users.len() + 1).to_string();
            accounts.users.push(Account {
                user: PublicUser {
                    id,
                    name: name.trim().to_string(),
                    email: normalize_email(email),
                    role,
                    created_at: None,
                    updated_at: None,
                },
                password: password.to_string(),
            });
        }
        self
    }

    /// Forget a token, as if it had expired
    pub async fn revoke(&self, token: &str) {
        self.accounts.lock().await.tokens.remove(token);
    }

    fn mint(&self, accounts: &mut Accounts, user_id: &str) -> String {
        let n = self.next_token.fetch_add(1, Ordering::Relaxed);
        let token = format!("mem-{user_id}-{n}");
        accounts.tokens.insert(token.clone(), user_id.to_string());
        token
    }
}

#[async_trait]
impl CredentialValidator for InMemoryCredentialValidator {
    async fn validate_login(&self, email: &str, password: &str) -> ValidationResult {
        if email.trim().is_empty() || password.is_empty() {
            return ValidationResult::rejected("Email and password are required");
        }

        let email = normalize_email(email);
        let mut accounts = self.accounts.lock().await;

        let Some(user) = accounts
            .users
            .iter()
            .find(|a| a.user.email == email && a.password == password)
            .map(|a| a.user.clone())
        else {
            return ValidationResult::rejected("Invalid credentials");
        };

        let token = self.mint(&mut accounts, &user.id);
        ValidationResult::accepted(token, user)
    }

    async fn validate_signup(&self, name: &str, email: &str, password: &str) -> ValidationResult {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return ValidationResult::rejected("Name, email and password are required");
        }

        let email = normalize_email(email);
        let mut accounts = self.accounts.lock().await;

        if accounts.users.iter().any(|a| a.user.email == email) {
            return ValidationResult::rejected("Email already registered");
        }

        let user = PublicUser {
            id: (accounts.users.len() + 1).to_string(),
            name: name.trim().to_string(),
            email,
            role: UserRole::default(),
            created_at: None,
            updated_at: None,
        };
        accounts.users.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });

        let token = self.mint(&mut accounts, &user.id);
        ValidationResult::accepted(token, user)
    }

    async fn validate_token(&self, token: &str) -> ValidationResult {
        let accounts = self.accounts.lock().await;

        let Some(user_id) = accounts.tokens.get(token) else {
            return ValidationResult::rejected("Invalid or expired token");
        };

        match accounts.users.iter().find(|a| &a.user.id == user_id) {
            Some(account) => ValidationResult::verified(account.user.clone()),
            None => ValidationResult::rejected("User not found"),
        }
    }
}
