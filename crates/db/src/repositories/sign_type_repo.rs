//! Repository for the `sign_types` table.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::sign_type::{CreateSignType, SignType, SignTypeSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, category, created_at, updated_at";

/// Provides CRUD operations for project-scoped sign types.
pub struct SignTypeRepo;

impl SignTypeRepo {
    /// Insert a new sign type under a project, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateSignType,
    ) -> Result<SignType, sqlx::Error> {
        let query = format!(
            "INSERT INTO sign_types (project_id, name, category)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SignType>(&query)
            .bind(project_id)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a sign type by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<SignType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sign_types WHERE id = ?");
        sqlx::query_as::<_, SignType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's sign types ordered by name.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<SignType>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM sign_types WHERE project_id = ? ORDER BY name ASC");
        sqlx::query_as::<_, SignType>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List a project's sign types joined with each type's spec version and
    /// the count of signs referencing it.
    pub async fn list_summaries_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<SignTypeSummary>, sqlx::Error> {
        sqlx::query_as::<_, SignTypeSummary>(
            "SELECT st.id, st.project_id, st.name, st.category,
                    sp.version AS spec_version,
                    (SELECT COUNT(*) FROM signs s WHERE s.sign_type_id = st.id) AS sign_count,
                    st.created_at, st.updated_at
             FROM sign_types st
             LEFT JOIN spec_pages sp ON sp.sign_type_id = st.id
             WHERE st.project_id = ?
             ORDER BY st.name ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Copy every master sign type whose name the project does not already
    /// have into the project's sign types. Returns the number of rows copied.
    pub async fn copy_from_masters(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO sign_types (project_id, name, category)
             SELECT ?, m.name, m.category
             FROM master_sign_types m
             WHERE m.name NOT IN (SELECT name FROM sign_types WHERE project_id = ?)",
        )
        .bind(project_id)
        .bind(project_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
