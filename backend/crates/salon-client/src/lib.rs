//! salon-client
//!
//! Everything a front end needs to talk to the salon API: the HTTP client,
//! credential validators, the auth service, session state, the route guard
//! and form checks.

pub(crate) mod auth;
pub(crate) mod error;
pub(crate) mod forms;
pub(crate) mod guard;
pub(crate) mod http;
pub(crate) mod storage;
pub(crate) mod validator;

#[cfg(test)]
mod tests;

pub use auth::{AuthService, AuthSession, AuthStore, SessionState};
pub use error::{ClientError, Result as ClientResult};
pub use forms::{LoginForm, MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, SignUpForm};
pub use guard::{GuardDecision, Route, RouteGuard};
pub use http::{ClientEvent, DEFAULT_TIMEOUT, HttpClient, RawResponse};
pub use storage::{FileTokenStorage, MemoryTokenStorage, TokenStorage};
pub use validator::{
    CredentialValidator, DEFAULT_VALIDATOR_TIMEOUT, HttpCredentialValidator,
    InMemoryCredentialValidator, ValidationResult,
};
