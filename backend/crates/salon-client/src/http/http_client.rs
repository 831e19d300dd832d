use crate::{ClientError, ClientEvent, ClientResult, RawResponse, TokenStorage};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::broadcast;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

const EVENT_CAPACITY: usize = 16;

/// HTTP client for the salon API
pub struct HttpClient {
    pub base_url: String,
    timeout: Duration,
    client: ReqwestClient,
    token_storage: Option<Arc<dyn TokenStorage>>,
    events: broadcast::Sender<ClientEvent>,
}

impl HttpClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:3001")
    /// * `timeout` - Deadline for each request, including reading the body
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: ReqwestClient::new(),
            token_storage: None,
            events,
        }
    }

    /// Attach a token source; requests then carry `Authorization: Bearer`
    pub fn with_token_storage(mut self, storage: Arc<dyn TokenStorage>) -> Self {
        self.token_storage = Some(storage);
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Receive [`ClientEvent`]s from this point on
    pub fn subscribe(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// Build a request against the base URL with the client timeout
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url).timeout(self.timeout)
    }

    /// Send a request and decode whatever JSON comes back.
    ///
    /// No status handling and no events: callers that treat a 401 as an
    /// ordinary answer (credential checks) go through here.
    pub async fn execute(&self, req: RequestBuilder) -> ClientResult<RawResponse> {
        let response = req
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(e, self.timeout))?;

        let body = if bytes.is_empty() {
            None
        } else {
            serde_json::from_slice::<Value>(&bytes).ok()
        };

        debug!("{} response from {}", status.as_u16(), self.base_url);

        Ok(RawResponse { status, body })
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        let req = self.request(Method::GET, path);
        self.send(req).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path).json(body);
        self.send(req).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ClientResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PUT, path).json(body);
        self.send(req).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ClientResult<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PATCH, path).json(body);
        self.send(req).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<Option<T>> {
        let req = self.request(Method::DELETE, path);
        self.send(req).await
    }

    // =========================================================================
    // Response shaping
    // =========================================================================

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<Option<T>> {
        let req = self.authorize(req).await?;
        let raw = self.execute(req).await?;

        if raw.status == StatusCode::UNAUTHORIZED {
            warn!("Session rejected by {}", self.base_url);
            // Nobody listening is fine
            let _ = self.events.send(ClientEvent::Unauthorized);
            return Err(ClientError::Unauthorized {
                message: raw.error_message(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if raw.status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !raw.is_success() {
            return Err(ClientError::Api {
                status: raw.status.as_u16(),
                message: raw.error_message(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let Some(body) = raw.body else {
            return Err(ClientError::malformed(format!(
                "Expected a JSON body with status {}",
                raw.status.as_u16()
            )));
        };

        let value = serde_json::from_value(body)?;
        Ok(Some(value))
    }

    async fn authorize(&self, req: RequestBuilder) -> ClientResult<RequestBuilder> {
        let Some(storage) = &self.token_storage else {
            return Ok(req);
        };

        match storage.load().await? {
            Some(token) => Ok(req.bearer_auth(token)),
            None => Ok(req),
        }
    }
}
