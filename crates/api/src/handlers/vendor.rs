//! Handlers for the vendor directory.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use signops_db::models::vendor::{CreateVendor, Vendor};
use signops_db::repositories::VendorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/vendors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Vendor>>> {
    let vendors = VendorRepo::list(&state.pool).await?;
    Ok(Json(vendors))
}

/// POST /api/vendors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVendor>,
) -> AppResult<(StatusCode, Json<Vendor>)> {
    let vendor = VendorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}
