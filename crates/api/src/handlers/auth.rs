//! Handlers for the `/auth` resource (login, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use signops_core::error::CoreError;
use signops_db::models::session::CreateSession;
use signops_db::models::user::UserInfo;
use signops_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::verify_password;
use crate::auth::token::{generate_token, hash_token};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Opaque bearer token; presented on subsequent requests.
    pub token: String,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a fresh session token and
/// the public user info. Unknown email and wrong password produce the same
/// response so the endpoint does not leak which emails exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let token = generate_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session_ttl_hours);
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash: hash_token(&token),
            expires_at,
        },
    )
    .await?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// POST /api/auth/logout
///
/// Revoke the presented session. Requires a valid bearer token.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke(&state.pool, &auth.token_hash).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<UserInfo> {
    Json(auth.user.into())
}
