//! Drawing set, drawing file, and page-inclusion models (takeoff scoping).

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/* --------------------------------------------------------------------------
   Drawing sets
   -------------------------------------------------------------------------- */

/// A row from the `drawing_sets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DrawingSet {
    pub id: DbId,
    pub project_id: DbId,
    pub version_label: String,
    pub uploaded_by: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new drawing set (multipart text fields).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDrawingSet {
    pub project_id: DbId,
    pub version_label: String,
    pub uploaded_by: Option<String>,
    pub notes: Option<String>,
}

/* --------------------------------------------------------------------------
   Drawing files
   -------------------------------------------------------------------------- */

/// A row from the `drawing_files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DrawingFile {
    pub id: DbId,
    pub drawing_set_id: DbId,
    pub file_path: String,
    pub original_filename: String,
    pub display_name: String,
    pub scale: Option<String>,
    pub short_code: Option<String>,
    pub page_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a file to a drawing set.
#[derive(Debug, Clone)]
pub struct CreateDrawingFile {
    pub drawing_set_id: DbId,
    pub file_path: String,
    pub original_filename: String,
    pub display_name: String,
    pub scale: Option<String>,
    pub short_code: Option<String>,
    pub page_count: i64,
}

/// DTO for updating a file's display metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDrawingFile {
    pub display_name: Option<String>,
    pub scale: Option<String>,
    pub short_code: Option<String>,
}

/* --------------------------------------------------------------------------
   Page inclusion
   -------------------------------------------------------------------------- */

/// A row from the `drawing_set_pages` flag table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DrawingSetPage {
    pub id: DbId,
    pub drawing_set_id: DbId,
    pub page_number: i64,
    pub included: bool,
}

/// DTO for the pages PATCH: the full list of included page numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateIncludedPages {
    pub included_pages: Vec<i64>,
}

/* --------------------------------------------------------------------------
   Aggregation types
   -------------------------------------------------------------------------- */

/// A drawing set with its files and parsed included-pages list, as served
/// by the drawings listing and the combined takeoffs payload.
#[derive(Debug, Clone, Serialize)]
pub struct DrawingSetDetail {
    #[serde(flatten)]
    pub set: DrawingSet,
    pub files: Vec<DrawingFile>,
    pub included_pages: Vec<i64>,
}
