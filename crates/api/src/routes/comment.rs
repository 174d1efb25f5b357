//! Route definitions for the `/comments` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// GET  /?entity_type=&entity_id=  -> list with author display names
/// POST /                          -> create (requires bearer session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(comment::list).post(comment::create))
}
