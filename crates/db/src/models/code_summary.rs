//! Code compliance summary model and DTOs.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `code_summaries` table. The three lists persist as JSON
/// arrays of strings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CodeSummary {
    pub id: DbId,
    pub project_id: DbId,
    pub jurisdiction: Option<String>,
    pub required: serde_json::Value,
    pub allowances: serde_json::Value,
    pub restrictions: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a project's code summary.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertCodeSummary {
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub allowances: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
}
