use crate::{AuthError, RateLimitConfig, Result as AuthErrorResult};

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use governor::{
    Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore,
};
use salon_core::normalize_email;

/// Attempt key: client address plus normalised email
type AttemptKey = (IpAddr, String);

/// Attempt throttle keyed by client address and normalised email.
///
/// Failures from one address never spend another address's budget for the
/// same account.
pub struct LoginRateLimiter {
    limiter: RateLimiter<AttemptKey, DefaultKeyedStateStore<AttemptKey>, DefaultClock>,
    config: RateLimitConfig,
}

impl LoginRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        let max_requests = NonZeroU32::new(config.max_requests).unwrap_or(NonZeroU32::MIN);
        let window = Duration::from_secs(config.window_secs.max(1));
        let quota = Quota::with_period(window / max_requests.get())
            .unwrap_or_else(|| Quota::per_second(max_requests))
            .allow_burst(max_requests);

        Self {
            limiter: RateLimiter::keyed(quota),
            config,
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Record an attempt by `client` for `email`, failing once the burst is spent
    #[track_caller]
    pub fn check(&self, client: IpAddr, email: &str) -> AuthErrorResult<()> {
        let key = (client, normalize_email(email));

        self.limiter.check_key(&key).map_err(|_| {
            log::warn!("Attempt limit reached for {} from {}", key.1, key.0);
            AuthError::RateLimitExceeded {
                limit: self.config.max_requests,
                window_secs: self.config.window_secs,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Drop state for keys whose quota has fully replenished
    pub fn prune(&self) {
        self.limiter.retain_recent();
    }
}
