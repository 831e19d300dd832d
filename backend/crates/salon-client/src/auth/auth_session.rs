use salon_core::PublicUser;

/// Token plus the user it was issued to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub token: String,
    pub user: PublicUser,
}
