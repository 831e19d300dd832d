use crate::ClientResult;
use crate::forms::{MIN_PASSWORD_LENGTH, check_email, check_password};

/// Sign-in form, checked before anything goes over the wire
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// First failing field wins
    pub fn validate(&self) -> ClientResult<()> {
        check_email(&self.email)?;
        check_password(&self.password, MIN_PASSWORD_LENGTH)
    }
}
