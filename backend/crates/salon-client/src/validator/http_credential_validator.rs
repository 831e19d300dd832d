use crate::{CredentialValidator, HttpClient, RawResponse, ValidationResult};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Method;
use salon_core::PublicUser;
use serde::Serialize;

pub const DEFAULT_VALIDATOR_TIMEOUT: Duration = Duration::from_millis(5_000);

const INVALID_SERVER_RESPONSE: &str = "Invalid server response";
const INVALID_OR_EXPIRED_TOKEN: &str = "Invalid or expired token";
const USER_NOT_FOUND: &str = "User not found";

/// Checks credentials against the salon API
pub struct HttpCredentialValidator {
    client: HttpClient,
}

impl HttpCredentialValidator {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_VALIDATOR_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: HttpClient::new(base_url, timeout),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.client.base_url
    }

    /// Shared tail of login and signup: both answer `{token, user}`
    fn session_from(raw: &RawResponse) -> ValidationResult {
        if !raw.is_success() {
            return ValidationResult::rejected(raw.error_message());
        }

        let (Some(token), Some(user)) = (raw.str_field("token"), Self::user_from(raw)) else {
            warn!("Auth response without token or user");
            return ValidationResult::rejected(INVALID_SERVER_RESPONSE);
        };

        ValidationResult::accepted(token, user)
    }

    fn user_from(raw: &RawResponse) -> Option<PublicUser> {
        let value = raw.body.as_ref()?.get("user")?;
        serde_json::from_value(value.clone()).ok()
    }
}

#[async_trait]
impl CredentialValidator for HttpCredentialValidator {
    async fn validate_login(&self, email: &str, password: &str) -> ValidationResult {
        #[derive(Serialize)]
        struct LoginBody<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .client
            .request(Method::POST, "/auth/login")
            .json(&LoginBody { email, password });

        match self.client.execute(req).await {
            Ok(raw) => Self::session_from(&raw),
            Err(e) => {
                debug!("Login request failed: {e}");
                ValidationResult::rejected(e.user_message())
            }
        }
    }

    async fn validate_signup(&self, name: &str, email: &str, password: &str) -> ValidationResult {
        #[derive(Serialize)]
        struct SignupBody<'a> {
            name: &'a str,
            email: &'a str,
            password: &'a str,
        }

        let req = self
            .client
            .request(Method::POST, "/auth/signup")
            .json(&SignupBody {
                name,
                email,
                password,
            });

        match self.client.execute(req).await {
            Ok(raw) => Self::session_from(&raw),
            Err(e) => {
                debug!("Signup request failed: {e}");
                ValidationResult::rejected(e.user_message())
            }
        }
    }

    async fn validate_token(&self, token: &str) -> ValidationResult {
        let req = self.client.request(Method::GET, "/auth/me").bearer_auth(token);

        let raw = match self.client.execute(req).await {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Token check failed: {e}");
                return ValidationResult::rejected(e.user_message());
            }
        };

        if !raw.is_success() {
            return ValidationResult::rejected(INVALID_OR_EXPIRED_TOKEN);
        }

        match Self::user_from(&raw) {
            Some(user) => ValidationResult::verified(user),
            None => ValidationResult::rejected(USER_NOT_FOUND),
        }
    }
}
