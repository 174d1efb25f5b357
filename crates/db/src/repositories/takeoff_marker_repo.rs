//! Repository for the `takeoff_markers` table.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::takeoff_marker::{CreateTakeoffMarker, TakeoffMarker, UpdateTakeoffMarker};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, drawing_set_id, sign_type_id, page_number, x, y, \
    notes, stage, created_at, updated_at";

/// Provides CRUD operations for takeoff markers.
pub struct TakeoffMarkerRepo;

impl TakeoffMarkerRepo {
    /// Place a new marker, returning the created row.
    ///
    /// `stage` defaults to `draft`.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateTakeoffMarker,
    ) -> Result<TakeoffMarker, sqlx::Error> {
        let query = format!(
            "INSERT INTO takeoff_markers
                (project_id, drawing_set_id, sign_type_id, page_number, x, y, notes, stage)
             VALUES (?, ?, ?, ?, ?, ?, ?, COALESCE(?, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TakeoffMarker>(&query)
            .bind(project_id)
            .bind(input.drawing_set_id)
            .bind(input.sign_type_id)
            .bind(input.page_number)
            .bind(input.x)
            .bind(input.y)
            .bind(&input.notes)
            .bind(&input.stage)
            .fetch_one(pool)
            .await
    }

    /// Find a marker by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<TakeoffMarker>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM takeoff_markers WHERE id = ?");
        sqlx::query_as::<_, TakeoffMarker>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all markers for a project, oldest first.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<TakeoffMarker>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM takeoff_markers WHERE project_id = ? ORDER BY id ASC");
        sqlx::query_as::<_, TakeoffMarker>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a marker. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTakeoffMarker,
    ) -> Result<Option<TakeoffMarker>, sqlx::Error> {
        let query = format!(
            "UPDATE takeoff_markers SET
                page_number = COALESCE(?, page_number),
                x = COALESCE(?, x),
                y = COALESCE(?, y),
                notes = COALESCE(?, notes),
                stage = COALESCE(?, stage),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TakeoffMarker>(&query)
            .bind(input.page_number)
            .bind(input.x)
            .bind(input.y)
            .bind(&input.notes)
            .bind(&input.stage)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a marker by its ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM takeoff_markers WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
