//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table. Root aggregate: drawing sets,
/// sign types, signs, pricing, code summary, RFQs, and the proof all hang
/// off it and cascade-delete with it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub client_org: Option<String>,
    pub status: String,
    pub logo_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// Arrives as multipart form fields alongside the optional logo file, so
/// everything except `name` is optional. `status` defaults to `active`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub address: Option<String>,
    pub client_org: Option<String>,
    pub status: Option<String>,
    pub logo_path: Option<String>,
}
