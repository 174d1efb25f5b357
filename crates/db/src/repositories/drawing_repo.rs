//! Repository for the `drawing_sets`, `drawing_files`, and
//! `drawing_set_pages` tables.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::drawing::{
    CreateDrawingFile, CreateDrawingSet, DrawingFile, DrawingSet, DrawingSetDetail,
    UpdateDrawingFile,
};

/// Column list for drawing_sets queries.
const SET_COLUMNS: &str = "id, project_id, version_label, uploaded_by, notes, created_at, updated_at";

/// Column list for drawing_files queries.
const FILE_COLUMNS: &str = "id, drawing_set_id, file_path, original_filename, display_name, \
    scale, short_code, page_count, created_at, updated_at";

/// Provides CRUD operations for drawing sets, their files, and the per-page
/// takeoff inclusion flags.
pub struct DrawingRepo;

impl DrawingRepo {
    /// Insert a new drawing set, returning the created row.
    pub async fn create_set(
        pool: &SqlitePool,
        input: &CreateDrawingSet,
    ) -> Result<DrawingSet, sqlx::Error> {
        let query = format!(
            "INSERT INTO drawing_sets (project_id, version_label, uploaded_by, notes)
             VALUES (?, ?, ?, ?)
             RETURNING {SET_COLUMNS}"
        );
        sqlx::query_as::<_, DrawingSet>(&query)
            .bind(input.project_id)
            .bind(&input.version_label)
            .bind(&input.uploaded_by)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a drawing set by its ID.
    pub async fn find_set_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<DrawingSet>, sqlx::Error> {
        let query = format!("SELECT {SET_COLUMNS} FROM drawing_sets WHERE id = ?");
        sqlx::query_as::<_, DrawingSet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all drawing sets for a project, oldest first.
    pub async fn list_sets_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<DrawingSet>, sqlx::Error> {
        let query = format!(
            "SELECT {SET_COLUMNS} FROM drawing_sets WHERE project_id = ? ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, DrawingSet>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Attach a file to a drawing set, returning the created row.
    pub async fn add_file(
        pool: &SqlitePool,
        input: &CreateDrawingFile,
    ) -> Result<DrawingFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO drawing_files
                (drawing_set_id, file_path, original_filename, display_name,
                 scale, short_code, page_count)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {FILE_COLUMNS}"
        );
        sqlx::query_as::<_, DrawingFile>(&query)
            .bind(input.drawing_set_id)
            .bind(&input.file_path)
            .bind(&input.original_filename)
            .bind(&input.display_name)
            .bind(&input.scale)
            .bind(&input.short_code)
            .bind(input.page_count)
            .fetch_one(pool)
            .await
    }

    /// Find a drawing file by its ID.
    pub async fn find_file_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<DrawingFile>, sqlx::Error> {
        let query = format!("SELECT {FILE_COLUMNS} FROM drawing_files WHERE id = ?");
        sqlx::query_as::<_, DrawingFile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a file's display metadata. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_file(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateDrawingFile,
    ) -> Result<Option<DrawingFile>, sqlx::Error> {
        let query = format!(
            "UPDATE drawing_files SET
                display_name = COALESCE(?, display_name),
                scale = COALESCE(?, scale),
                short_code = COALESCE(?, short_code),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?
             RETURNING {FILE_COLUMNS}"
        );
        sqlx::query_as::<_, DrawingFile>(&query)
            .bind(&input.display_name)
            .bind(&input.scale)
            .bind(&input.short_code)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List files attached to a drawing set, oldest first.
    pub async fn list_files_by_set(
        pool: &SqlitePool,
        drawing_set_id: DbId,
    ) -> Result<Vec<DrawingFile>, sqlx::Error> {
        let query = format!(
            "SELECT {FILE_COLUMNS} FROM drawing_files WHERE drawing_set_id = ? ORDER BY id ASC"
        );
        sqlx::query_as::<_, DrawingFile>(&query)
            .bind(drawing_set_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a set's page-inclusion flags in one transaction: every
    /// existing flag row is cleared, then each listed page is upserted as
    /// included.
    pub async fn set_included_pages(
        pool: &SqlitePool,
        drawing_set_id: DbId,
        pages: &[i64],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("UPDATE drawing_set_pages SET included = 0 WHERE drawing_set_id = ?")
            .bind(drawing_set_id)
            .execute(&mut *tx)
            .await?;

        for &page in pages {
            sqlx::query(
                "INSERT INTO drawing_set_pages (drawing_set_id, page_number, included)
                 VALUES (?, ?, 1)
                 ON CONFLICT (drawing_set_id, page_number) DO UPDATE SET included = 1",
            )
            .bind(drawing_set_id)
            .bind(page)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }

    /// Page numbers currently flagged as included for a set, ascending.
    pub async fn included_pages(
        pool: &SqlitePool,
        drawing_set_id: DbId,
    ) -> Result<Vec<i64>, sqlx::Error> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT page_number FROM drawing_set_pages
             WHERE drawing_set_id = ? AND included = 1
             ORDER BY page_number ASC",
        )
        .bind(drawing_set_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(p,)| p).collect())
    }

    /// Compose the full per-project drawings payload: each set with its
    /// files and parsed included-pages list.
    pub async fn list_details_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<DrawingSetDetail>, sqlx::Error> {
        let sets = Self::list_sets_by_project(pool, project_id).await?;
        let mut details = Vec::with_capacity(sets.len());
        for set in sets {
            let files = Self::list_files_by_set(pool, set.id).await?;
            let included_pages = Self::included_pages(pool, set.id).await?;
            details.push(DrawingSetDetail {
                set,
                files,
                included_pages,
            });
        }
        Ok(details)
    }
}
