use crate::{CliError, CliResult, Commands};

use salon_client::{
    AuthService, AuthStore, ClientEvent, CredentialValidator, GuardDecision, HttpClient,
    HttpCredentialValidator, LoginForm, RouteGuard, SignUpForm, TokenStorage,
};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde_json::{Value, json};
use tokio::sync::broadcast;

/// Everything the commands need, wired once at startup
pub struct App {
    store: AuthStore,
    api: HttpClient,
    events: broadcast::Receiver<ClientEvent>,
}

impl App {
    /// Production wiring: HTTP validator and API client against one server
    pub fn new(
        server_url: &str,
        timeout: Duration,
        validator_timeout: Duration,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        let validator = Arc::new(HttpCredentialValidator::with_timeout(
            server_url,
            validator_timeout,
        ));
        let api = HttpClient::new(server_url, timeout);
        Self::with_parts(validator, api, storage)
    }

    pub fn with_parts(
        validator: Arc<dyn CredentialValidator>,
        api: HttpClient,
        storage: Arc<dyn TokenStorage>,
    ) -> Self {
        let api = api.with_token_storage(storage.clone());
        let events = api.subscribe();
        let store = AuthStore::new(AuthService::new(validator), storage);

        Self { store, api, events }
    }

    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    pub async fn run(&mut self, command: Commands) -> CliResult<Value> {
        let result = self.dispatch(command).await;
        self.handle_events().await;
        result
    }

    async fn dispatch(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Signup {
                name,
                email,
                password,
                confirm_password,
            } => {
                let form = SignUpForm {
                    confirm_password: confirm_password.unwrap_or_else(|| password.clone()),
                    name,
                    email,
                    password,
                };
                form.validate()?;

                let user = self
                    .store
                    .signup(&form.name, &form.email, &form.password)
                    .await?;
                Ok(json!({ "success": true, "user": user }))
            }

            Commands::Login { email, password } => {
                let form = LoginForm::new(email, password);
                form.validate()?;

                let user = self.store.login(&form.email, &form.password).await?;
                Ok(json!({ "success": true, "user": user }))
            }

            Commands::Logout => {
                self.store.logout().await?;
                Ok(json!({ "success": true }))
            }

            Commands::Whoami => {
                let state = self.store.hydrate().await;
                match state.user {
                    Some(user) => Ok(json!({ "user": user })),
                    None => Err(CliError::NotSignedIn),
                }
            }

            Commands::Dashboard { role } => {
                let state = self.store.hydrate().await;
                let guard = match role {
                    Some(role) => RouteGuard::requiring(role),
                    None => RouteGuard::new(),
                };

                match guard.evaluate(&state) {
                    GuardDecision::Render => Ok(json!({
                        "decision": "render",
                        "user": state.user,
                    })),
                    GuardDecision::Redirect(route) => Err(CliError::Redirect { route }),
                    // not reachable after hydrate()
                    GuardDecision::Pending => Ok(json!({ "decision": "pending" })),
                }
            }

            Commands::Me => {
                let body: Option<Value> = self.api.get("/auth/me").await?;
                Ok(body.unwrap_or(Value::Null))
            }
        }
    }

    /// React to what the HTTP client reported during the last command
    async fn handle_events(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(ClientEvent::Unauthorized) => {
                    warn!("Session expired, sign in again");
                    if let Err(e) = self.store.logout().await {
                        warn!("Could not clear stored token: {e}");
                    }
                }
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    debug!("Missed {n} client events");
                }
                Err(_) => break,
            }
        }
    }
}
