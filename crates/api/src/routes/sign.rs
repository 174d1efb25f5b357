//! Route definitions for the `/signs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::sign;
use crate::state::AppState;

/// Routes mounted at `/signs`.
///
/// ```text
/// GET  /{id}           -> get_by_id
/// PUT  /{id}           -> update (recomputes ROM)
/// GET  /{id}/tile-art  -> current artwork record
/// POST /{id}/tile-art  -> attach/replace artwork record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(sign::get_by_id).put(sign::update))
        .route(
            "/{id}/tile-art",
            get(sign::get_tile_art).post(sign::upsert_tile_art),
        )
}
