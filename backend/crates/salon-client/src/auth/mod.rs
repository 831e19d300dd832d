pub(crate) mod auth_service;
pub(crate) mod auth_session;
pub(crate) mod auth_store;
pub(crate) mod session_state;

pub use auth_service::AuthService;
pub use auth_session::AuthSession;
pub use auth_store::AuthStore;
pub use session_state::SessionState;
