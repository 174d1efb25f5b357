//! Handlers for signs and their tile artwork.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use signops_core::error::CoreError;
use signops_core::status::SignStatus;
use signops_core::types::DbId;
use signops_db::models::sign::{CreateSign, Sign, TileArtwork, UpdateSign, UpsertTileArtwork};
use signops_db::repositories::{ProjectRepo, SignRepo, SignTypeRepo, TileArtworkRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::rom::recalculate_project;
use crate::state::AppState;

/// GET /api/projects/{project_id}/signs
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<Sign>>> {
    ensure_project(&state, project_id).await?;
    let signs = SignRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(signs))
}

/// POST /api/projects/{project_id}/signs
///
/// The referenced sign type must belong to the same project. The project's
/// ROM rollup is recomputed after the insert.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateSign>,
) -> AppResult<(StatusCode, Json<Sign>)> {
    ensure_project(&state, project_id).await?;

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
    if let Some(status) = &input.status {
        SignStatus::parse(status)?;
    }
    validate_quantities(input.unit_price, input.quantity)?;

    let sign = SignRepo::create(&state.pool, project_id, &input).await?;
    recalculate_project(&state, project_id).await?;
    Ok((StatusCode::CREATED, Json(sign)))
}

/// GET /api/signs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Sign>> {
    let sign = SignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Sign", id }))?;
    Ok(Json(sign))
}

/// PUT /api/signs/{id}
///
/// Update dimensions, quantity, unit price, status, or location ref. The
/// project's ROM rollup is recomputed after the write.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSign>,
) -> AppResult<Json<Sign>> {
    if let Some(status) = &input.status {
        SignStatus::parse(status)?;
    }
    validate_quantities(input.unit_price, input.quantity)?;

    let sign = SignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Sign", id }))?;
    recalculate_project(&state, sign.project_id).await?;
    Ok(Json(sign))
}

/// GET /api/signs/{id}/tile-art
pub async fn get_tile_art(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TileArtwork>> {
    let artwork = TileArtworkRepo::find_by_sign(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TileArtwork",
            id,
        }))?;
    Ok(Json(artwork))
}

/// POST /api/signs/{id}/tile-art
///
/// Attach or replace the sign's artwork record. A fresh record starts with
/// `stale: false` in its params unless the caller says otherwise.
pub async fn upsert_tile_art(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpsertTileArtwork>,
) -> AppResult<(StatusCode, Json<TileArtwork>)> {
    SignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Sign", id }))?;

    if let Some(params) = &mut input.params {
        let obj = params.as_object_mut().ok_or_else(|| {
            AppError::BadRequest("params must be a JSON object".into())
        })?;
        obj.entry("stale").or_insert(serde_json::json!(false));
    } else {
        input.params = Some(serde_json::json!({ "stale": false }));
    }

    let artwork = TileArtworkRepo::upsert(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(artwork)))
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

fn validate_quantities(unit_price: Option<f64>, quantity: Option<i64>) -> AppResult<()> {
    if let Some(price) = unit_price {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "unit_price must be a non-negative number".into(),
            )));
        }
    }
    if let Some(qty) = quantity {
        if qty < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "quantity must be non-negative".into(),
            )));
        }
    }
    Ok(())
}
