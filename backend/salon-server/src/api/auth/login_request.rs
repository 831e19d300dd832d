use crate::{ApiError, ApiResult};

use serde::Deserialize;

/// Missing fields deserialize as empty so they hit the same 400 as blank ones
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    #[track_caller]
    pub fn validate(&self) -> ApiResult<()> {
        let missing = if self.email.trim().is_empty() {
            Some("email")
        } else if self.password.is_empty() {
            Some("password")
        } else {
            None
        };

        if let Some(field) = missing {
            return Err(ApiError::missing_field(
                field,
                "Email and password are required",
            ));
        }

        Ok(())
    }
}
