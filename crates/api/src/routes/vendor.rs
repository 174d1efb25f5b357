//! Route definitions for the `/vendors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::vendor;
use crate::state::AppState;

/// Routes mounted at `/vendors`.
///
/// ```text
/// GET  /  -> list directory
/// POST /  -> create entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(vendor::list).post(vendor::create))
}
