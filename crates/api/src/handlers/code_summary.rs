//! Handlers for per-project code compliance summaries.

use axum::extract::{Path, State};
use axum::Json;
use signops_core::error::CoreError;
use signops_core::types::DbId;
use signops_db::models::code_summary::{CodeSummary, UpsertCodeSummary};
use signops_db::repositories::{CodeSummaryRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/projects/{project_id}/code-summary
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<CodeSummary>> {
    ensure_project(&state, project_id).await?;
    let summary = CodeSummaryRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CodeSummary",
            id: project_id,
        }))?;
    Ok(Json(summary))
}

/// PUT /api/projects/{project_id}/code-summary
///
/// Insert or replace the project's jurisdiction compliance lists.
pub async fn upsert(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<UpsertCodeSummary>,
) -> AppResult<Json<CodeSummary>> {
    ensure_project(&state, project_id).await?;
    let summary = CodeSummaryRepo::upsert(&state.pool, project_id, &input).await?;
    Ok(Json(summary))
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
