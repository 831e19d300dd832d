use crate::{AuthSession, ClientError, ClientResult, CredentialValidator, ValidationResult};

use std::sync::Arc;

use log::{info, warn};
use salon_core::PublicUser;

/// Turns validator outcomes into sessions or errors
#[derive(Clone)]
pub struct AuthService {
    validator: Arc<dyn CredentialValidator>,
}

impl AuthService {
    pub fn new(validator: Arc<dyn CredentialValidator>) -> Self {
        Self { validator }
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthSession> {
        let result = self.validator.validate_login(email, password).await;
        let session = Self::into_session(result, "Login failed")?;
        info!("Logged in as {}", session.user.email);
        Ok(session)
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> ClientResult<AuthSession> {
        let result = self.validator.validate_signup(name, email, password).await;
        let session = Self::into_session(result, "Signup failed")?;
        info!("Signed up as {}", session.user.email);
        Ok(session)
    }

    pub async fn verify_token(&self, token: &str) -> ClientResult<PublicUser> {
        let result = self.validator.validate_token(token).await;

        if !result.success {
            return Err(ClientError::rejected(
                result.error.unwrap_or_else(|| String::from("Invalid token")),
            ));
        }

        result
            .user
            .ok_or_else(|| ClientError::malformed("Token accepted without a user"))
    }

    /// Tokens are stateless on the server; there is nothing to tell it
    pub fn logout(&self) {}

    fn into_session(result: ValidationResult, default_error: &str) -> ClientResult<AuthSession> {
        if !result.success {
            let message = result
                .error
                .unwrap_or_else(|| default_error.to_string());
            warn!("{default_error}: {message}");
            return Err(ClientError::rejected(message));
        }

        match (result.token, result.user) {
            (Some(token), Some(user)) => Ok(AuthSession { token, user }),
            _ => Err(ClientError::malformed("Session response missing token or user")),
        }
    }
}
