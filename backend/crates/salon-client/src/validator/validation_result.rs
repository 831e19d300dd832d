use salon_core::PublicUser;

/// Outcome of a credential check.
///
/// Failures are carried as a message rather than an error so every backend
/// reports them the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<PublicUser>,
    pub error: Option<String>,
}

impl ValidationResult {
    /// Login or signup accepted
    pub fn accepted(token: impl Into<String>, user: PublicUser) -> Self {
        Self {
            success: true,
            token: Some(token.into()),
            user: Some(user),
            error: None,
        }
    }

    /// Token accepted; the caller already holds the token
    pub fn verified(user: PublicUser) -> Self {
        Self {
            success: true,
            token: None,
            user: Some(user),
            error: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            token: None,
            user: None,
            error: Some(message.into()),
        }
    }
}
