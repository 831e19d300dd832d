use salon_auth::{LoginRateLimiter, RateLimitConfig, TokenIssuer};
use salon_db::{JsonStore, UserRepository};

use std::sync::Arc;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub users: UserRepository,
    pub token_issuer: Arc<TokenIssuer>,
    pub rate_limiter: Arc<LoginRateLimiter>,
}

impl AppState {
    pub fn new(
        store: Arc<JsonStore>,
        token_issuer: TokenIssuer,
        rate_limit: RateLimitConfig,
    ) -> Self {
        Self {
            users: UserRepository::new(store),
            token_issuer: Arc::new(token_issuer),
            rate_limiter: Arc::new(LoginRateLimiter::new(rate_limit)),
        }
    }
}
