use crate::{ApiError, ApiResult};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl SignupRequest {
    #[track_caller]
    pub fn validate(&self) -> ApiResult<()> {
        // First blank field in form order
        let missing = [
            ("name", self.name.trim()),
            ("email", self.email.trim()),
            ("password", self.password.as_str()),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty());

        if let Some((field, _)) = missing {
            return Err(ApiError::missing_field(
                field,
                "Name, email and password are required",
            ));
        }

        Ok(())
    }
}
