//! Handlers for the per-project ROM pricing rollup.

use axum::extract::{Path, State};
use axum::Json;
use signops_core::error::CoreError;
use signops_core::pricing::compute_rom;
use signops_core::types::DbId;
use signops_db::models::rom_pricing::{RomPricing, RomPricingView};
use signops_db::repositories::{ProjectRepo, RomPricingRepo, SignRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Recompute a project's rollup from its current signs and persist it.
///
/// Pure recomputation: repeated calls with unchanged signs upsert an
/// identical row. Sign create/update handlers call this after their write
/// so the derived row never drifts.
pub(crate) async fn recalculate_project(
    state: &AppState,
    project_id: DbId,
) -> AppResult<RomPricing> {
    let lines = SignRepo::pricing_lines(&state.pool, project_id).await?;
    let breakdown = compute_rom(&lines);
    let row = RomPricingRepo::upsert(&state.pool, project_id, &breakdown).await?;
    Ok(row)
}

/// GET /api/projects/{project_id}/rom
///
/// Returns the stored rollup, computing it on demand the first time.
pub async fn get_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<RomPricingView>> {
    ensure_project(&state, project_id).await?;
    let row = match RomPricingRepo::find_by_project(&state.pool, project_id).await? {
        Some(row) => row,
        None => recalculate_project(&state, project_id).await?,
    };
    Ok(Json(row.into()))
}

/// POST /api/projects/{project_id}/rom/recalculate
pub async fn recalculate(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<RomPricingView>> {
    ensure_project(&state, project_id).await?;
    let row = recalculate_project(&state, project_id).await?;
    Ok(Json(row.into()))
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
