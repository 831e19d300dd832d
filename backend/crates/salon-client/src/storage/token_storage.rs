use crate::ClientResult;

use async_trait::async_trait;

/// Durable home for the session token.
///
/// Only the token string is kept; the user is re-fetched on hydration.
#[async_trait]
pub trait TokenStorage: Send + Sync {
    async fn load(&self) -> ClientResult<Option<String>>;

    async fn save(&self, token: &str) -> ClientResult<()>;

    /// Removing a token that isn't there is not an error
    async fn remove(&self) -> ClientResult<()>;
}
