//! Sign and tile artwork models and DTOs.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/* --------------------------------------------------------------------------
   Signs
   -------------------------------------------------------------------------- */

/// A row from the `signs` table: a concrete placed instance of a sign type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sign {
    pub id: DbId,
    pub project_id: DbId,
    pub sign_type_id: DbId,
    pub location_ref: Option<String>,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    pub unit_price: f64,
    pub quantity: i64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new sign.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSign {
    pub sign_type_id: DbId,
    pub location_ref: Option<String>,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    pub unit_price: Option<f64>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
}

/// DTO for updating an existing sign. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSign {
    pub location_ref: Option<String>,
    pub width_in: Option<f64>,
    pub height_in: Option<f64>,
    pub unit_price: Option<f64>,
    pub quantity: Option<i64>,
    pub status: Option<String>,
}

/* --------------------------------------------------------------------------
   Tile artwork
   -------------------------------------------------------------------------- */

/// A row from the `tile_artworks` table. `params` carries a `stale` flag
/// that is set for every sign of a type when that type's spec changes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TileArtwork {
    pub id: DbId,
    pub sign_id: DbId,
    pub params: serde_json::Value,
    pub version: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching or replacing a sign's artwork record.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertTileArtwork {
    pub params: Option<serde_json::Value>,
    pub version: Option<String>,
}
