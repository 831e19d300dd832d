use salon_core::PublicUser;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: PublicUser,
}
