use salon_core::PublicUser;

/// Snapshot of the client session.
///
/// `initialized` flips to true once, when hydration finishes, so "not yet
/// checked" can be told apart from "checked and logged out".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub user: Option<PublicUser>,
    pub token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub initialized: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}
