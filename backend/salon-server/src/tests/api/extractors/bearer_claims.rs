use crate::{ApiError, AppState, BearerClaims};

use salon_auth::{RateLimitConfig, TokenIssuer};
use salon_core::{PublicUser, UserRole};
use salon_db::JsonStore;

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use tempfile::TempDir;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

async fn create_test_state() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::open(dir.path().join("db.json")).await.unwrap();
    let state = AppState::new(
        Arc::new(store),
        TokenIssuer::with_hs256(SECRET, Duration::from_secs(600)),
        RateLimitConfig::default(),
    );
    (dir, state)
}

fn ana() -> PublicUser {
    PublicUser {
        id: "1".into(),
        name: "Ana".into(),
        email: "ana@x.com".into(),
        role: UserRole::Peluquera,
        created_at: None,
        updated_at: None,
    }
}

async fn extract(state: &AppState, header: Option<&str>) -> Result<BearerClaims, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _) = builder.body(Body::empty()).unwrap().into_parts();

    BearerClaims::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn test_extractor_with_valid_token() {
    let (_dir, state) = create_test_state().await;
    let token = state.token_issuer.issue(&ana()).unwrap();

    let BearerClaims(claims) = extract(&state, Some(&format!("Bearer {}", token)))
        .await
        .unwrap();

    assert_eq!(claims.id, "1");
    assert_eq!(claims.role, UserRole::Peluquera);
}

#[tokio::test]
async fn test_extractor_without_header() {
    let (_dir, state) = create_test_state().await;

    let result = extract(&state, None).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { ref message, .. }) if message == "Token not provided"));
}

#[tokio::test]
async fn test_extractor_with_wrong_scheme() {
    let (_dir, state) = create_test_state().await;

    let result = extract(&state, Some("Token abc")).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { ref message, .. }) if message == "Token not provided"));
}

#[tokio::test]
async fn test_extractor_with_forged_token() {
    let (_dir, state) = create_test_state().await;
    let forged = TokenIssuer::with_hs256(b"another-secret-of-at-least-32-bytes", Duration::from_secs(600))
        .issue(&ana())
        .unwrap();

    let result = extract(&state, Some(&format!("Bearer {}", forged))).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { ref message, .. }) if message == "Invalid or expired token"));
}
