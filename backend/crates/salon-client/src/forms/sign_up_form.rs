use crate::forms::{MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, check_email, check_password};
use crate::{ClientError, ClientResult};

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    pub fn validate(&self) -> ClientResult<()> {
        if self.name.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(ClientError::invalid_input(
                "name",
                format!("Name must be at least {MIN_NAME_LENGTH} characters"),
            ));
        }

        check_email(&self.email)?;
        check_password(&self.password, MIN_PASSWORD_LENGTH)?;

        if self.password != self.confirm_password {
            return Err(ClientError::invalid_input(
                "confirmPassword",
                "Passwords do not match",
            ));
        }

        Ok(())
    }
}
