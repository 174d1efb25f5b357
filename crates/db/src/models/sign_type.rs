//! Sign type and master sign type models and DTOs.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/* --------------------------------------------------------------------------
   Project sign types
   -------------------------------------------------------------------------- */

/// A row from the `sign_types` table (project-scoped category of sign).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SignType {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new sign type under a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSignType {
    pub name: String,
    pub category: Option<String>,
}

/* --------------------------------------------------------------------------
   Master sign types
   -------------------------------------------------------------------------- */

/// A row from the `master_sign_types` table (studio-level directory).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MasterSignType {
    pub id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a master sign type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMasterSignType {
    pub name: String,
    pub category: Option<String>,
}

/* --------------------------------------------------------------------------
   Aggregation types
   -------------------------------------------------------------------------- */

/// Listing aggregate: a sign type joined with its spec's version and the
/// count of signs referencing it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SignTypeSummary {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub spec_version: Option<String>,
    pub sign_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
