//! Disk storage for multipart uploads.

use signops_core::uploads::{stored_filename, validate_upload, UploadKind};

use crate::error::{AppError, AppResult};

/// Validate an uploaded file and write it under `upload_dir`.
///
/// Returns the stored path (`<upload_dir>/<uuid>.<ext>`), which is what the
/// owning row records and what `/uploads` serves. Validation happens before
/// the write, so a rejected upload leaves nothing on disk.
pub async fn store_upload(
    upload_dir: &str,
    kind: UploadKind,
    original: &str,
    data: &[u8],
) -> AppResult<String> {
    validate_upload(kind, original, data.len())?;

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    let stored = stored_filename(original);
    let path = std::path::Path::new(upload_dir).join(&stored);
    tokio::fs::write(&path, data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(path.to_string_lossy().to_string())
}
