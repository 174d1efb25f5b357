//! Repository for the `spec_pages` table.
//!
//! A sign type has at most one spec page (unique on `sign_type_id`); the
//! upsert replaces the row rather than inserting a sibling. Version bumping
//! is decided by the caller so the repository stays a plain write.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::spec_page::{SpecPage, UpsertSpecPage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, sign_type_id, title, requirements, reference_path, version, created_at, updated_at";

/// Provides read/upsert operations for spec pages.
pub struct SpecPageRepo;

impl SpecPageRepo {
    /// Find the spec page for a sign type.
    pub async fn find_by_sign_type(
        pool: &SqlitePool,
        sign_type_id: DbId,
    ) -> Result<Option<SpecPage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM spec_pages WHERE sign_type_id = ?");
        sqlx::query_as::<_, SpecPage>(&query)
            .bind(sign_type_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace the spec page for a sign type at the given version.
    pub async fn upsert(
        pool: &SqlitePool,
        sign_type_id: DbId,
        input: &UpsertSpecPage,
        version: &str,
    ) -> Result<SpecPage, sqlx::Error> {
        let query = format!(
            "INSERT INTO spec_pages (sign_type_id, title, requirements, reference_path, version)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT (sign_type_id) DO UPDATE SET
                title = excluded.title,
                requirements = excluded.requirements,
                reference_path = COALESCE(excluded.reference_path, reference_path),
                version = excluded.version,
                updated_at = CURRENT_TIMESTAMP
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SpecPage>(&query)
            .bind(sign_type_id)
            .bind(&input.title)
            .bind(&input.requirements)
            .bind(&input.reference_path)
            .bind(version)
            .fetch_one(pool)
            .await
    }
}
