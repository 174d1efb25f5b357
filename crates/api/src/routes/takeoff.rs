//! Route definitions for the `/takeoff-markers` resource.

use axum::routing::patch;
use axum::Router;

use crate::handlers::takeoff;
use crate::state::AppState;

/// Routes mounted at `/takeoff-markers`.
///
/// ```text
/// PATCH  /{id}  -> update position/notes/stage
/// DELETE /{id}  -> remove marker
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", patch(takeoff::update).delete(takeoff::delete))
}
