//! Route definitions for sign types and the master directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::sign_type;
use crate::state::AppState;

/// Routes mounted at `/sign-types`.
///
/// ```text
/// GET  /{id}       -> get_by_id
/// GET  /{id}/spec  -> current spec page
/// POST /{id}/spec  -> attach/replace spec (multipart, bumps version)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(sign_type::get_by_id))
        .route(
            "/{id}/spec",
            get(sign_type::get_spec).post(sign_type::upsert_spec),
        )
}

/// Routes mounted at `/master-sign-types`.
///
/// ```text
/// GET  /  -> list studio directory
/// POST /  -> create entry
/// ```
pub fn master_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(sign_type::list_masters).post(sign_type::create_master),
    )
}
