use crate::{ApiError, AppState, health, login, me, signup};

use std::panic::Location;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use error_location::ErrorLocation;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Auth endpoints
        .route("/auth/login", post(login))
        .route("/auth/signup", post(signup))
        .route("/auth/me", get(me))
        // Health check
        .route("/health", get(health::health_check))
        .fallback(not_found)
        .with_state(state)
        // The SPA is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        message: format!("No route for {}", uri.path()),
        location: ErrorLocation::from(Location::caller()),
    }
}
