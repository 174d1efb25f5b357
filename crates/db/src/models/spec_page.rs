//! Spec page model and DTOs.
//!
//! A sign type has at most one spec page; updates replace the row in place
//! and bump the version string.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `spec_pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SpecPage {
    pub id: DbId,
    pub sign_type_id: DbId,
    pub title: String,
    /// Free-form key/value requirements bag (material, mounting,
    /// dimensions, ...).
    pub requirements: serde_json::Value,
    pub reference_path: Option<String>,
    pub version: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching or replacing a sign type's spec page.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSpecPage {
    pub title: String,
    pub requirements: serde_json::Value,
    pub reference_path: Option<String>,
}
