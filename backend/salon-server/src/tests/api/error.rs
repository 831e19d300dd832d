use crate::ApiError;

use salon_auth::AuthError;
use salon_db::DbError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_invalid_input_returns_400_with_envelope() {
    let (status, json) = body_json(ApiError::invalid_input("Email and password are required")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "INVALID_INPUT");
    assert_eq!(json["message"], "Email and password are required");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_missing_field_includes_field() {
    let error = ApiError::missing_field("name", "Name, email and password are required");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_INPUT");
    assert_eq!(json["field"], "name");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("Invalid credentials")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("Database operation failed")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_duplicate_email_maps_to_409() {
    let error: ApiError = DbError::DuplicateEmail {
        email: "ana@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "Email already registered");
}

#[tokio::test]
async fn test_corrupt_store_maps_to_500_without_path() {
    let error: ApiError = DbError::Corrupt {
        path: "/srv/salon/db.json".into(),
        message: "expected value at line 1".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json["message"].as_str().unwrap().contains("/srv"));
}

#[tokio::test]
async fn test_rate_limit_maps_to_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 10,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["code"], "TOO_MANY_REQUESTS");
}

#[tokio::test]
async fn test_missing_header_maps_to_token_not_provided() {
    let error: ApiError = AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Token not provided");
}

#[tokio::test]
async fn test_expired_token_maps_to_invalid_or_expired() {
    let error: ApiError = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid or expired token");
}
