//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use salon_auth::{Claims, bearer_token};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

/// Verified claims from the `Authorization: Bearer <token>` header.
///
/// Missing header or wrong scheme rejects with 401 "Token not provided";
/// a bad signature or an expired token rejects with 401 "Invalid or expired token".
pub struct BearerClaims(pub Claims);

impl FromRequestParts<AppState> for BearerClaims {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header)?;
            let claims = state.token_issuer.verify(token)?;

            log::debug!("Authenticated request for user {}", claims.id);

            Ok(BearerClaims(claims))
        }
    }
}
