//! Auth REST API handlers
//!
//! Login and signup issue a token; `/auth/me` resolves a token back to the
//! current stored user.

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, BearerClaims, ClientAddr, LoginRequest,
    MeResponse, SignupRequest,
};

use salon_auth::{PasswordCheck, hash_password, verify_password};
use salon_core::{NewUser, normalize_email};

use std::panic::Location;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use error_location::ErrorLocation;

/// Same message for unknown email and wrong password
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/login
///
/// Verify email and password, returning a token and the public user
pub async fn login(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;
    request.validate()?;

    let email = normalize_email(&request.email);
    state.rate_limiter.check(client, &email)?;

    let Some(mut user) = state.users.find_by_email(&email).await? else {
        log::info!("Login failed: unknown email");
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    let stored = user.password.clone();
    let password = request.password;
    let check = run_blocking(move || verify_password(&password, &stored)).await?;

    match check {
        PasswordCheck::Invalid => {
            log::info!("Login failed for user {}: wrong password", user.id);
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
        PasswordCheck::ValidLegacy => {
            let upgraded = upgrade_legacy_password(&state, &user.id, &user.password).await;
            if let Some(upgraded) = upgraded {
                user = upgraded;
            }
        }
        PasswordCheck::Valid => {}
    }

    let public = user.to_public();
    let token = state.token_issuer.issue(&public)?;

    log::info!("User {} logged in", public.id);

    Ok(Json(AuthResponse::new(token, public)))
}

/// POST /auth/signup
///
/// Register a new `cliente` account and log it in
pub async fn signup(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Json(request) = payload?;
    request.validate()?;

    let email = normalize_email(&request.email);
    state.rate_limiter.check(client, &email)?;

    // Skip the hashing cost for an obvious duplicate; insert re-checks under the lock
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::Conflict {
            message: "Email already registered".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password = request.password;
    let password_hash = run_blocking(move || hash_password(&password)).await??;

    let new_user = NewUser::new(&request.name, &email, password_hash)?;
    let user = state.users.insert(new_user).await?;

    let public = user.to_public();
    let token = state.token_issuer.issue(&public)?;

    log::info!("User {} signed up", public.id);

    Ok((StatusCode::CREATED, Json(AuthResponse::new(token, public))))
}

/// GET /auth/me
///
/// Current user for the bearer token, read fresh from the store
pub async fn me(
    State(state): State<AppState>,
    BearerClaims(claims): BearerClaims,
) -> ApiResult<Json<MeResponse>> {
    let user = state
        .users
        .find_by_id(&claims.id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(MeResponse {
        success: true,
        user: user.into(),
    }))
}

// =============================================================================
// Helpers
// =============================================================================

/// Argon2 is CPU-bound; keep it off the async workers
async fn run_blocking<T, F>(work: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        log::error!("Blocking task failed: {}", e);
        ApiError::internal("Authentication failed")
    })
}

/// Re-hash a plaintext record after it authenticated.
///
/// Failures are logged and leave the login itself successful.
async fn upgrade_legacy_password(
    state: &AppState,
    user_id: &str,
    plaintext: &str,
) -> Option<salon_core::User> {
    let plaintext = plaintext.to_string();
    let hash = match run_blocking(move || hash_password(&plaintext)).await {
        Ok(Ok(hash)) => hash,
        Ok(Err(e)) => {
            log::warn!("Could not hash legacy password for user {}: {}", user_id, e);
            return None;
        }
        Err(_) => return None,
    };

    match state.users.update_password(user_id, hash).await {
        Ok(updated) => {
            log::info!("Upgraded legacy password for user {}", user_id);
            updated
        }
        Err(e) => {
            log::warn!("Could not store upgraded password for user {}: {}", user_id, e);
            None
        }
    }
}
