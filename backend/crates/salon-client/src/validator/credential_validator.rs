use crate::ValidationResult;

use async_trait::async_trait;

/// Where credentials get checked. Picked once when the application is put
/// together: the real API, or an in-memory fake.
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    async fn validate_login(&self, email: &str, password: &str) -> ValidationResult;

    async fn validate_signup(&self, name: &str, email: &str, password: &str) -> ValidationResult;

    /// Resolve a stored token back to its user
    async fn validate_token(&self, token: &str) -> ValidationResult;
}
