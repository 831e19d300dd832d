#[allow(clippy::module_inception)]
pub mod auth;
pub mod auth_response;
pub mod login_request;
pub mod me_response;
pub mod signup_request;
