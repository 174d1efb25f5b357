//! Repository for the `code_summaries` table.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::code_summary::{CodeSummary, UpsertCodeSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, jurisdiction, required, allowances, restrictions, created_at, updated_at";

/// Provides read/upsert operations for per-project code summaries.
pub struct CodeSummaryRepo;

impl CodeSummaryRepo {
    /// Find the code summary for a project.
    pub async fn find_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Option<CodeSummary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM code_summaries WHERE project_id = ?");
        sqlx::query_as::<_, CodeSummary>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a project's code summary.
    pub async fn upsert(
        pool: &SqlitePool,
        project_id: DbId,
        input: &UpsertCodeSummary,
    ) -> Result<CodeSummary, sqlx::Error> {
        let query = format!(
            "INSERT INTO code_summaries (project_id, jurisdiction, required, allowances, restrictions)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT (project_id) DO UPDATE SET
                jurisdiction = excluded.jurisdiction,
                required = excluded.required,
                allowances = excluded.allowances,
                restrictions = excluded.restrictions,
                updated_at = CURRENT_TIMESTAMP
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CodeSummary>(&query)
            .bind(project_id)
            .bind(&input.jurisdiction)
            .bind(serde_json::Value::from(input.required.clone()))
            .bind(serde_json::Value::from(input.allowances.clone()))
            .bind(serde_json::Value::from(input.restrictions.clone()))
            .fetch_one(pool)
            .await
    }
}
