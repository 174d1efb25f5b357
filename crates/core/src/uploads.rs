//! Upload validation: size limits, extension allow-lists, stored names.
//!
//! Uploads are size- and type-checked before any database row is written,
//! so a rejected file leaves no partial state behind.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum project logo size (5 MiB).
pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

/// Maximum drawing / spec reference file size (50 MiB).
pub const MAX_DRAWING_BYTES: usize = 50 * 1024 * 1024;

/// Extensions accepted for project logos.
pub const LOGO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "svg"];

/// Extensions accepted for drawing files and spec reference pages.
pub const DRAWING_EXTENSIONS: &[&str] = &["pdf"];

// ---------------------------------------------------------------------------
// Upload kinds
// ---------------------------------------------------------------------------

/// The categories of file the API accepts, each with its own limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Logo,
    Drawing,
}

impl UploadKind {
    /// Maximum accepted size in bytes for this kind.
    pub fn max_bytes(self) -> usize {
        match self {
            Self::Logo => MAX_LOGO_BYTES,
            Self::Drawing => MAX_DRAWING_BYTES,
        }
    }

    /// Allowed lowercase file extensions for this kind.
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Logo => LOGO_EXTENSIONS,
            Self::Drawing => DRAWING_EXTENSIONS,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Lowercased extension of `filename`, or empty string when there is none.
pub fn file_extension(filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}

/// Validate an upload's extension and size against the limits for `kind`.
pub fn validate_upload(kind: UploadKind, filename: &str, len: usize) -> Result<(), CoreError> {
    let ext = file_extension(filename);
    if !kind.allowed_extensions().contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported file type '.{ext}'. Allowed: {}",
            kind.allowed_extensions()
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }
    if len > kind.max_bytes() {
        return Err(CoreError::Validation(format!(
            "File '{filename}' is {len} bytes, exceeding the {} byte limit",
            kind.max_bytes()
        )));
    }
    Ok(())
}

/// Collision-free stored filename preserving the original extension.
pub fn stored_filename(original: &str) -> String {
    let ext = file_extension(original);
    if ext.is_empty() {
        uuid::Uuid::new_v4().to_string()
    } else {
        format!("{}.{ext}", uuid::Uuid::new_v4())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
