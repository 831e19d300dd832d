use crate::{AuthService, AuthSession, ClientError, ClientResult, SessionState, TokenStorage};

use std::sync::Arc;

use log::{debug, info, warn};
use salon_core::PublicUser;
use tokio::sync::watch;

/// Session state shared by everything that renders or guards.
///
/// Each mutation is its own async step. Two overlapping logins are not
/// serialised: whichever finishes last wins.
pub struct AuthStore {
    service: AuthService,
    storage: Arc<dyn TokenStorage>,
    state: watch::Sender<SessionState>,
}

impl AuthStore {
    pub fn new(service: AuthService, storage: Arc<dyn TokenStorage>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            service,
            storage,
            state,
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Observe every change from now on
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub async fn login(&self, email: &str, password: &str) -> ClientResult<PublicUser> {
        self.begin();
        let outcome = self.service.login(email, password).await;
        self.finish(outcome).await
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> ClientResult<PublicUser> {
        self.begin();
        let outcome = self.service.signup(name, email, password).await;
        self.finish(outcome).await
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.state.send_modify(|s| {
            s.user = None;
            s.token = None;
            s.error = None;
        });
        self.service.logout();
        self.storage.remove().await?;
        info!("Logged out");
        Ok(())
    }

    /// Restore the session from a stored token.
    ///
    /// Always ends with `initialized == true`; any failure clears the
    /// stored token and leaves an empty session.
    pub async fn hydrate(&self) -> SessionState {
        self.state.send_modify(|s| s.is_loading = true);

        let token = match self.storage.load().await {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read stored token: {e}");
                if let Err(e) = self.storage.remove().await {
                    warn!("Could not remove stored token: {e}");
                }
                None
            }
        };

        let Some(token) = token else {
            debug!("No stored token");
            self.settle(None, None);
            return self.snapshot();
        };

        match self.service.verify_token(&token).await {
            Ok(user) => {
                debug!("Stored token belongs to {}", user.email);
                self.settle(Some(token), Some(user));
            }
            Err(e) => {
                warn!("Stored token rejected: {}", e.user_message());
                if let Err(e) = self.storage.remove().await {
                    warn!("Could not remove stored token: {e}");
                }
                self.settle(None, None);
            }
        }

        self.snapshot()
    }

    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error = None);
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.is_loading = true;
            s.error = None;
        });
    }

    /// Commit the outcome of a login or signup
    async fn finish(&self, outcome: ClientResult<AuthSession>) -> ClientResult<PublicUser> {
        let session = match outcome {
            Ok(session) => session,
            Err(e) => return Err(self.fail(e)),
        };

        if let Err(e) = self.storage.save(&session.token).await {
            return Err(self.fail(e));
        }

        let user = session.user.clone();
        self.state.send_modify(|s| {
            s.user = Some(session.user);
            s.token = Some(session.token);
            s.is_loading = false;
        });
        Ok(user)
    }

    fn fail(&self, e: ClientError) -> ClientError {
        let message = e.user_message();
        self.state.send_modify(|s| {
            s.error = Some(message);
            s.is_loading = false;
        });
        e
    }

    fn settle(&self, token: Option<String>, user: Option<PublicUser>) {
        self.state.send_modify(|s| {
            s.token = token;
            s.user = user;
            s.is_loading = false;
            s.initialized = true;
        });
    }
}
