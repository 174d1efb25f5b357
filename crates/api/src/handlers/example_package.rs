//! Handlers for example signage packages.

use axum::extract::{Path, State};
use axum::Json;
use signops_core::error::CoreError;
use signops_core::types::DbId;
use signops_db::models::example_package::ExamplePackage;
use signops_db::repositories::{ExamplePackageRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/projects/{project_id}/example-packages
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ExamplePackage>>> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    let packages = ExamplePackageRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(packages))
}
