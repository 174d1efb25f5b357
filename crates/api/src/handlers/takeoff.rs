//! Handlers for takeoff markers and the combined takeoffs payload.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use signops_core::error::CoreError;
use signops_core::takeoff::{validate_marker_position, validate_normalized, validate_page_number, MarkerStage};
use signops_core::types::DbId;
use signops_db::models::drawing::DrawingSetDetail;
use signops_db::models::sign_type::SignType;
use signops_db::models::takeoff_marker::{CreateTakeoffMarker, TakeoffMarker, UpdateTakeoffMarker};
use signops_db::repositories::{
    DrawingRepo, ProjectRepo, SignTypeRepo, TakeoffMarkerRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Combined read-side payload for the takeoff screen: everything the
/// client needs in one round-trip.
#[derive(Debug, Serialize)]
pub struct TakeoffData {
    pub drawing_sets: Vec<DrawingSetDetail>,
    pub sign_types: Vec<SignType>,
    pub markers: Vec<TakeoffMarker>,
}

/// GET /api/projects/{project_id}/takeoff-markers
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<TakeoffMarker>>> {
    ensure_project(&state, project_id).await?;
    let markers = TakeoffMarkerRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(markers))
}

/// POST /api/projects/{project_id}/takeoff-markers
///
/// Coordinates must be normalized to [0, 1]; the drawing set and sign type
/// must belong to the project.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateTakeoffMarker>,
) -> AppResult<(StatusCode, Json<TakeoffMarker>)> {
    ensure_project(&state, project_id).await?;
    validate_marker_position(input.x, input.y)?;
    validate_page_number(input.page_number)?;
    if let Some(stage) = &input.stage {
        MarkerStage::parse(stage)?;
    }

    let set = DrawingRepo::find_set_by_id(&state.pool, input.drawing_set_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DrawingSet",
            id: input.drawing_set_id,
        }))?;
    if set.project_id != project_id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Drawing set {} belongs to a different project",
            set.id
        ))));
    }

    let sign_type = SignTypeRepo::find_by_id(&state.pool, input.sign_type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SignType",
            id: input.sign_type_id,
        }))?;
    if sign_type.project_id != project_id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Sign type {} belongs to a different project",
            sign_type.id
        ))));
    }

    let marker = TakeoffMarkerRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(marker)))
}

/// PATCH /api/takeoff-markers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTakeoffMarker>,
) -> AppResult<Json<TakeoffMarker>> {
    if let Some(x) = input.x {
        validate_normalized("x", x)?;
    }
    if let Some(y) = input.y {
        validate_normalized("y", y)?;
    }
    if let Some(page) = input.page_number {
        validate_page_number(page)?;
    }
    if let Some(stage) = &input.stage {
        MarkerStage::parse(stage)?;
    }

    let marker = TakeoffMarkerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TakeoffMarker",
            id,
        }))?;
    Ok(Json(marker))
}

/// DELETE /api/takeoff-markers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TakeoffMarkerRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TakeoffMarker",
            id,
        }))
    }
}

/// GET /api/projects/{project_id}/takeoffs
///
/// Combined payload: drawing sets with parsed included pages, project sign
/// types, and all markers.
pub async fn combined(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<TakeoffData>> {
    ensure_project(&state, project_id).await?;
    let drawing_sets = DrawingRepo::list_details_by_project(&state.pool, project_id).await?;
    let sign_types = SignTypeRepo::list_by_project(&state.pool, project_id).await?;
    let markers = TakeoffMarkerRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(TakeoffData {
        drawing_sets,
        sign_types,
        markers,
    }))
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
