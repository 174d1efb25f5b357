//! Route definitions for the `/rfqs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::rfq;
use crate::state::AppState;

/// Routes mounted at `/rfqs`.
///
/// ```text
/// GET  /{id}/bids  -> list bids, lowest price first
/// POST /{id}/bids  -> attach a vendor's bid
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}/bids", get(rfq::list_bids).post(rfq::create_bid))
}
