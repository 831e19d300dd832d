pub mod bearer;
pub mod claims;
pub mod error;
pub mod login_rate_limiter;
pub mod password;
pub mod rate_limit_config;
pub mod token_issuer;

pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use login_rate_limiter::LoginRateLimiter;
pub use password::{PasswordCheck, hash_password, verify_password};
pub use rate_limit_config::RateLimitConfig;
pub use token_issuer::{DEFAULT_TOKEN_TTL, TokenIssuer};
