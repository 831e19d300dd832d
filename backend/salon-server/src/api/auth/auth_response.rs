use salon_core::PublicUser;

use serde::Serialize;

/// Body of a successful login or signup
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: PublicUser,
}

impl AuthResponse {
    pub fn new(token: String, user: PublicUser) -> Self {
        Self {
            success: true,
            token,
            user,
        }
    }
}
