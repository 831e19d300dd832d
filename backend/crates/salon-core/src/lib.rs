pub mod email;
pub mod error;
pub mod models;

pub use email::{is_valid_email, normalize_email};
pub use error::{CoreError, Result as CoreResult};
pub use models::new_user::NewUser;
pub use models::public_user::PublicUser;
pub use models::user::User;
pub use models::user_role::UserRole;

#[cfg(test)]
mod tests;
