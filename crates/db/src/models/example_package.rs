//! Example package model.

use serde::Serialize;
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `example_packages` table: a reference signage package
/// shown to clients during early project scoping.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExamplePackage {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub created_at: Timestamp,
}
