#![allow(dead_code)]

//! Test infrastructure for salon-server API tests

use salon_auth::{RateLimitConfig, TokenIssuer};
use salon_db::JsonStore;
use salon_server::AppState;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::with_hs256(TEST_SECRET, Duration::from_secs(3600))
}

pub fn db_path(dir: &TempDir) -> PathBuf {
    dir.path().join("db.json")
}

/// AppState over a fresh store in a temp dir
pub async fn create_test_app_state() -> (TempDir, AppState) {
    create_test_app_state_with_limit(100).await
}

pub async fn create_test_app_state_with_limit(max_requests: u32) -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let state = open_state(&dir, max_requests).await;
    (dir, state)
}

/// AppState over a document written before the store is opened
pub async fn create_seeded_app_state(document: Value) -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        db_path(&dir),
        serde_json::to_string_pretty(&document).unwrap(),
    )
    .unwrap();
    let state = open_state(&dir, 100).await;
    (dir, state)
}

async fn open_state(dir: &TempDir, max_requests: u32) -> AppState {
    let store = JsonStore::open(db_path(dir)).await.unwrap();
    AppState::new(
        Arc::new(store),
        test_issuer(),
        RateLimitConfig {
            max_requests,
            window_secs: 60,
        },
    )
}

pub fn read_document(dir: &TempDir) -> Value {
    serde_json::from_str(&std::fs::read_to_string(db_path(dir)).unwrap()).unwrap()
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Same as [`json_request`], as if sent over a connection from `addr`
pub fn json_request_from(addr: &str, method: &str, uri: &str, body: Value) -> Request<Body> {
    let mut request = json_request(method, uri, body);
    let addr: std::net::SocketAddr = addr.parse().unwrap();
    request.extensions_mut().insert(axum::extract::ConnectInfo(addr));
    request
}

pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Run one request through a fresh router and decode the JSON body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn legacy_user(id: &str, email: &str, password: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": "Legacy",
        "email": email,
        "password": password,
        "role": "admin",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z"
    })
}

/// Serve the router on an ephemeral localhost port; returns the base URL
pub async fn spawn_server(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(
            listener,
            salon_server::build_router(state)
                .into_make_service_with_connect_info::<std::net::SocketAddr>(),
        )
        .await
        .unwrap();
    });
    format!("http://{addr}")
}
