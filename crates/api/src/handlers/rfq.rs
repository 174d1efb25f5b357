//! Handlers for RFQs and their bids.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use signops_core::error::CoreError;
use signops_core::status::RfqStatus;
use signops_core::types::DbId;
use signops_db::models::vendor::{Bid, CreateBid, CreateRfq, Rfq, RfqSummary};
use signops_db::repositories::{ProjectRepo, RfqRepo, VendorRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/projects/{project_id}/rfqs
///
/// Each RFQ is returned with its derived bid count and lowest bid price.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<RfqSummary>>> {
    ensure_project(&state, project_id).await?;
    let summaries = RfqRepo::list_summaries_by_project(&state.pool, project_id).await?;
    Ok(Json(summaries))
}

/// POST /api/projects/{project_id}/rfqs
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateRfq>,
) -> AppResult<(StatusCode, Json<Rfq>)> {
    ensure_project(&state, project_id).await?;
    if let Some(status) = &input.status {
        RfqStatus::parse(status)?;
    }
    let rfq = RfqRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(rfq)))
}

/// GET /api/rfqs/{id}/bids
pub async fn list_bids(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Bid>>> {
    ensure_rfq(&state, id).await?;
    let bids = RfqRepo::list_bids(&state.pool, id).await?;
    Ok(Json(bids))
}

/// POST /api/rfqs/{id}/bids
pub async fn create_bid(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateBid>,
) -> AppResult<(StatusCode, Json<Bid>)> {
    ensure_rfq(&state, id).await?;
    VendorRepo::find_by_id(&state.pool, input.vendor_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id: input.vendor_id,
        }))?;
    if !input.price.is_finite() || input.price < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "price must be a non-negative number".into(),
        )));
    }

    let bid = RfqRepo::create_bid(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(bid)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_project(state: &AppState, id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(())
}

async fn ensure_rfq(state: &AppState, id: DbId) -> AppResult<()> {
    RfqRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Rfq", id }))?;
    Ok(())
}
