//! Handlers for the `/projects` resource.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use signops_core::error::CoreError;
use signops_core::status::ProjectStatus;
use signops_core::types::DbId;
use signops_core::uploads::UploadKind;
use signops_db::models::project::{CreateProject, Project};
use signops_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::uploads::store_upload;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// POST /api/projects
///
/// Accepts a multipart form: required `name`, optional `address`,
/// `client_org`, `status` (defaults to `active`), and an optional `logo`
/// file (<= 5 MiB, image formats) stored under the upload dir and
/// referenced by path.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Project>)> {
    let mut input = CreateProject::default();
    let mut logo: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "name" => {
                input.name = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "address" => {
                input.address = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "client_org" => {
                input.client_org = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "status" => {
                let status = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                ProjectStatus::parse(&status)?;
                input.status = Some(status);
            }
            "logo" => {
                let filename = field.file_name().unwrap_or("logo.png").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                logo = Some((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Missing required 'name' field".into(),
        ));
    }

    if let Some((filename, data)) = logo {
        let path = store_upload(&state.config.upload_dir, UploadKind::Logo, &filename, &data).await?;
        input.logo_path = Some(path);
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}
