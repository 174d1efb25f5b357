//! Takeoff marker model and DTOs.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `takeoff_markers` table: a pin on a drawing page,
/// coordinates normalized to [0, 1].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TakeoffMarker {
    pub id: DbId,
    pub project_id: DbId,
    pub drawing_set_id: DbId,
    pub sign_type_id: DbId,
    pub page_number: i64,
    pub x: f64,
    pub y: f64,
    pub notes: Option<String>,
    pub stage: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for placing a new marker.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTakeoffMarker {
    pub drawing_set_id: DbId,
    pub sign_type_id: DbId,
    pub page_number: i64,
    pub x: f64,
    pub y: f64,
    pub notes: Option<String>,
    pub stage: Option<String>,
}

/// DTO for updating an existing marker. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTakeoffMarker {
    pub page_number: Option<i64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub notes: Option<String>,
    pub stage: Option<String>,
}
