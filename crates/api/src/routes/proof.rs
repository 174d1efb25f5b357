//! Route definitions for the `/proofs` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::proof;
use crate::state::AppState;

/// Routes mounted at `/proofs`.
///
/// ```text
/// POST /{id}/items  -> place a sign on the proof canvas
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/items", post(proof::add_item))
}
