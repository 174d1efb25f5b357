//! Handlers for drawing sets, drawing files, and page inclusion.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use signops_core::error::CoreError;
use signops_core::takeoff::validate_page_number;
use signops_core::types::DbId;
use signops_core::uploads::{file_extension, UploadKind};
use signops_db::models::drawing::{
    CreateDrawingFile, CreateDrawingSet, DrawingFile, DrawingSetDetail, UpdateDrawingFile,
    UpdateIncludedPages,
};
use signops_db::repositories::{DrawingRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::uploads::store_upload;

/// GET /api/projects/{project_id}/drawings
///
/// Each set is returned with its files and the parsed included-pages list.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<DrawingSetDetail>>> {
    ensure_project(&state, project_id).await?;
    let details = DrawingRepo::list_details_by_project(&state.pool, project_id).await?;
    Ok(Json(details))
}

/// POST /api/projects/{project_id}/drawings
///
/// Multipart form: `version_label` (required), optional `uploaded_by`,
/// `notes`, `scale`, `short_code`, and `page_count` (applied to each file
/// in the request, default 1), plus one or more `file` parts (PDF only,
/// <= 50 MiB each). Files are size- and type-checked before the set row is
/// written.
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DrawingSetDetail>)> {
    ensure_project(&state, project_id).await?;

    let mut version_label: Option<String> = None;
    let mut uploaded_by: Option<String> = None;
    let mut notes: Option<String> = None;
    let mut scale: Option<String> = None;
    let mut short_code: Option<String> = None;
    let mut page_count: i64 = 1;
    let mut files: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "version_label" => version_label = Some(text(field).await?),
            "uploaded_by" => uploaded_by = Some(text(field).await?),
            "notes" => notes = Some(text(field).await?),
            "scale" => scale = Some(text(field).await?),
            "short_code" => short_code = Some(text(field).await?),
            "page_count" => {
                page_count = text(field)
                    .await?
                    .parse()
                    .map_err(|_| AppError::BadRequest("page_count must be an integer".into()))?;
                validate_page_number(page_count)?;
            }
            "file" => {
                let filename = field.file_name().unwrap_or("drawing.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                files.push((filename, data.to_vec()));
            }
            _ => {} // ignore unknown fields
        }
    }

    let version_label = version_label
        .ok_or_else(|| AppError::BadRequest("Missing required 'version_label' field".into()))?;
    if files.is_empty() {
        return Err(AppError::BadRequest("Missing required 'file' field".into()));
    }

    // Validate every file before writing anything, so a bad second file
    // does not leave a half-populated set behind.
    for (filename, data) in &files {
        signops_core::uploads::validate_upload(UploadKind::Drawing, filename, data.len())?;
    }

    let set = DrawingRepo::create_set(
        &state.pool,
        &CreateDrawingSet {
            project_id,
            version_label,
            uploaded_by,
            notes,
        },
    )
    .await?;

    for (filename, data) in &files {
        let path = store_upload(&state.config.upload_dir, UploadKind::Drawing, filename, data).await?;
        let display_name = filename
            .strip_suffix(&format!(".{}", file_extension(filename)))
            .unwrap_or(filename)
            .to_string();
        DrawingRepo::add_file(
            &state.pool,
            &CreateDrawingFile {
                drawing_set_id: set.id,
                file_path: path,
                original_filename: filename.clone(),
                display_name,
                scale: scale.clone(),
                short_code: short_code.clone(),
                page_count,
            },
        )
        .await?;
    }

    let files = DrawingRepo::list_files_by_set(&state.pool, set.id).await?;
    let included_pages = DrawingRepo::included_pages(&state.pool, set.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(DrawingSetDetail {
            set,
            files,
            included_pages,
        }),
    ))
}

/// PATCH /api/drawings/{id}/pages
///
/// Replace which pages of the set are included for takeoff. Fans out to the
/// per-page inclusion flag table in one transaction.
pub async fn update_pages(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIncludedPages>,
) -> AppResult<Json<Vec<i64>>> {
    DrawingRepo::find_set_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DrawingSet",
            id,
        }))?;

    for &page in &input.included_pages {
        validate_page_number(page)?;
    }

    DrawingRepo::set_included_pages(&state.pool, id, &input.included_pages).await?;
    let pages = DrawingRepo::included_pages(&state.pool, id).await?;
    Ok(Json(pages))
}

/// PATCH /api/drawing-files/{id}
///
/// Update a file's display metadata (display name, scale, short code).
pub async fn update_file(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDrawingFile>,
) -> AppResult<Json<DrawingFile>> {
    let file = DrawingRepo::update_file(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DrawingFile",
            id,
        }))?;
    Ok(Json(file))
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

async fn text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}
