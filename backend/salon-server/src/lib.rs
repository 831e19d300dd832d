pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{login, me, signup},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        me_response::MeResponse,
        signup_request::SignupRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::bearer_claims::BearerClaims,
    extractors::client_addr::ClientAddr,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
