//! Route definitions for drawing sets and drawing files.

use axum::routing::patch;
use axum::Router;

use crate::handlers::drawing;
use crate::state::AppState;

/// Routes mounted at `/drawings`.
///
/// ```text
/// PATCH /{id}/pages  -> replace included-pages flags
/// ```
pub fn set_router() -> Router<AppState> {
    Router::new().route("/{id}/pages", patch(drawing::update_pages))
}

/// Routes mounted at `/drawing-files`.
///
/// ```text
/// PATCH /{id}  -> update display metadata
/// ```
pub fn file_router() -> Router<AppState> {
    Router::new().route("/{id}", patch(drawing::update_file))
}
