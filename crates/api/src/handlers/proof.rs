//! Handlers for proofs and their canvas items.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use signops_core::error::CoreError;
use signops_core::takeoff::validate_normalized;
use signops_core::types::DbId;
use signops_db::models::proof::{CreateProofItem, ProofDetail, ProofItem};
use signops_db::repositories::{ProjectRepo, ProofRepo, SignRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/projects/{project_id}/proof
///
/// Idempotent get-or-create: the first fetch creates the proof with
/// version `1.0` and status `draft`.
pub async fn get_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<ProofDetail>> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    let proof = ProofRepo::find_or_create_for_project(&state.pool, project_id).await?;
    let items = ProofRepo::list_items(&state.pool, proof.id).await?;
    Ok(Json(ProofDetail { proof, items }))
}

/// POST /api/proofs/{id}/items
///
/// Place a sign on the proof canvas. Position and extents are normalized
/// to [0, 1]; the sign must belong to the proof's project.
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateProofItem>,
) -> AppResult<(StatusCode, Json<ProofItem>)> {
    let proof = ProofRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Proof",
            id,
        }))?;

    validate_normalized("x", input.x)?;
    validate_normalized("y", input.y)?;
    validate_normalized("w", input.w)?;
    validate_normalized("h", input.h)?;

    let sign = SignRepo::find_by_id(&state.pool, input.sign_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Sign",
            id: input.sign_id,
        }))?;
    if sign.project_id != proof.project_id {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Sign {} belongs to a different project",
            sign.id
        ))));
    }

    let item = ProofRepo::add_item(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}
