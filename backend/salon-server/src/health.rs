use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - process status plus a store read
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, users) = match state.users.count().await {
        Ok(count) => ("healthy", Some(count)),
        Err(e) => {
            log::error!("Health check could not read the store: {}", e);
            ("degraded", None)
        }
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "users": users,
    });

    (StatusCode::OK, Json(health)).into_response()
}
