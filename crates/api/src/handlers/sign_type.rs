//! Handlers for sign types, master sign types, and spec pages.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use signops_core::error::CoreError;
use signops_core::spec_version::{bump_version, INITIAL_SPEC_VERSION};
use signops_core::types::DbId;
use signops_core::uploads::UploadKind;
use signops_db::models::sign_type::{
    CreateMasterSignType, CreateSignType, MasterSignType, SignType, SignTypeSummary,
};
use signops_db::models::spec_page::{SpecPage, UpsertSpecPage};
use signops_db::repositories::{
    MasterSignTypeRepo, ProjectRepo, SignTypeRepo, SpecPageRepo, TileArtworkRepo,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::uploads::store_upload;

// ---------------------------------------------------------------------------
// Project sign types
// ---------------------------------------------------------------------------

/// GET /api/projects/{project_id}/sign-types
///
/// Aggregate listing: each type with its linked spec's version and the
/// count of signs referencing it.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<SignTypeSummary>>> {
    ensure_project(&state, project_id).await?;
    let summaries = SignTypeRepo::list_summaries_by_project(&state.pool, project_id).await?;
    Ok(Json(summaries))
}

/// POST /api/projects/{project_id}/sign-types
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<CreateSignType>,
) -> AppResult<(StatusCode, Json<SignType>)> {
    ensure_project(&state, project_id).await?;
    let sign_type = SignTypeRepo::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(sign_type)))
}

/// GET /api/sign-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SignType>> {
    let sign_type = SignTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SignType",
            id,
        }))?;
    Ok(Json(sign_type))
}

/// GET /api/sign-types/{id}/spec
pub async fn get_spec(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SpecPage>> {
    let spec = SpecPageRepo::find_by_sign_type(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SpecPage",
            id,
        }))?;
    Ok(Json(spec))
}

/// POST /api/sign-types/{id}/spec
///
/// Attach or replace the type's spec page. Multipart form: `title`
/// (required), optional `requirements` (a JSON object string), optional
/// reference `file` (PDF). The version starts at `v1.0` and each
/// replacement bumps it by +0.1; every artwork on a sign of this type is
/// flagged stale.
pub async fn upsert_spec(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<SpecPage>> {
    SignTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SignType",
            id,
        }))?;

    let mut title: Option<String> = None;
    let mut requirements = serde_json::json!({});
    let mut reference: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "requirements" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                requirements = serde_json::from_str(&raw)
                    .map_err(|e| AppError::BadRequest(format!("Invalid requirements JSON: {e}")))?;
                if !requirements.is_object() {
                    return Err(AppError::BadRequest(
                        "requirements must be a JSON object".into(),
                    ));
                }
            }
            "file" => {
                let filename = field.file_name().unwrap_or("spec.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                reference = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let title = title.ok_or_else(|| AppError::BadRequest("Missing required 'title' field".into()))?;

    let reference_path = match reference {
        Some((filename, data)) => Some(
            store_upload(&state.config.upload_dir, UploadKind::Drawing, &filename, &data).await?,
        ),
        None => None,
    };

    let version = match SpecPageRepo::find_by_sign_type(&state.pool, id).await? {
        Some(existing) => bump_version(&existing.version)?,
        None => INITIAL_SPEC_VERSION.to_string(),
    };

    let spec = SpecPageRepo::upsert(
        &state.pool,
        id,
        &UpsertSpecPage {
            title,
            requirements,
            reference_path,
        },
        &version,
    )
    .await?;

    // The spec changed under every sign of this type; their artwork needs
    // regeneration.
    let stale = TileArtworkRepo::mark_stale_for_sign_type(&state.pool, id).await?;
    tracing::debug!(sign_type_id = id, stale, "Marked artworks stale after spec update");

    Ok(Json(spec))
}

// ---------------------------------------------------------------------------
// Master sign types
// ---------------------------------------------------------------------------

/// GET /api/master-sign-types
pub async fn list_masters(State(state): State<AppState>) -> AppResult<Json<Vec<MasterSignType>>> {
    let masters = MasterSignTypeRepo::list(&state.pool).await?;
    Ok(Json(masters))
}

/// POST /api/master-sign-types
pub async fn create_master(
    State(state): State<AppState>,
    Json(input): Json<CreateMasterSignType>,
) -> AppResult<(StatusCode, Json<MasterSignType>)> {
    let master = MasterSignTypeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(master)))
}

/// POST /api/projects/{project_id}/copy-master-sign-types
///
/// Copy the studio directory into the project, skipping names it already
/// has. Returns the project's full sign type list.
pub async fn copy_masters(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<SignType>>> {
    ensure_project(&state, project_id).await?;
    SignTypeRepo::copy_from_masters(&state.pool, project_id).await?;
    let types = SignTypeRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(types))
}

/// GET /api/projects/{project_id}/sign-types-takeoff
///
/// Plain project-scoped sign type list for the takeoff screen (no spec or
/// sign-count aggregates).
pub async fn list_for_takeoff(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<SignType>>> {
    ensure_project(&state, project_id).await?;
    let types = SignTypeRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(types))
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
