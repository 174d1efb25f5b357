//! Bearer-session extractor.
//!
//! Handlers that need the calling user take an [`AuthUser`] argument; the
//! extractor resolves the `Authorization: Bearer <token>` header to an
//! unexpired session row and its user, rejecting with 401 otherwise.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use signops_core::error::CoreError;
use signops_db::models::user::User;
use signops_db::repositories::{SessionRepo, UserRepo};

use crate::auth::token::hash_token;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated user resolved from the request's bearer session.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
    /// Digest of the presented token, kept for logout.
    pub token_hash: String,
}

/// Pull the bearer token out of the `Authorization` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Missing bearer token".into(),
            ))
        })?;

        let token_hash = hash_token(token);
        let session = SessionRepo::find_valid(&state.pool, &token_hash)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid or expired session".into(),
                ))
            })?;

        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Invalid or expired session".into(),
                ))
            })?;

        Ok(AuthUser { user, token_hash })
    }
}
