pub(crate) mod login_form;
pub(crate) mod sign_up_form;

pub use login_form::LoginForm;
pub use sign_up_form::SignUpForm;

use crate::{ClientError, ClientResult};

use salon_core::is_valid_email;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_NAME_LENGTH: usize = 2;

pub(crate) fn check_email(email: &str) -> ClientResult<()> {
    if !is_valid_email(email) {
        return Err(ClientError::invalid_input("email", "Invalid email"));
    }
    Ok(())
}

pub(crate) fn check_password(password: &str, min: usize) -> ClientResult<()> {
    if password.chars().count() < min {
        return Err(ClientError::invalid_input(
            "password",
            format!("Password must be at least {min} characters"),
        ));
    }
    Ok(())
}
