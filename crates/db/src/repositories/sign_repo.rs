//! Repository for the `signs` table.

use signops_core::pricing::SignLine;
use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::sign::{CreateSign, Sign, UpdateSign};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, sign_type_id, location_ref, width_in, height_in, \
    unit_price, quantity, status, created_at, updated_at";

/// Provides CRUD operations for signs.
pub struct SignRepo;

impl SignRepo {
    /// Insert a new sign, returning the created row.
    ///
    /// `unit_price` defaults to 0, `quantity` to 1, `status` to `draft`.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateSign,
    ) -> Result<Sign, sqlx::Error> {
        let query = format!(
            "INSERT INTO signs
                (project_id, sign_type_id, location_ref, width_in, height_in,
                 unit_price, quantity, status)
             VALUES (?, ?, ?, ?, ?, COALESCE(?, 0), COALESCE(?, 1), COALESCE(?, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sign>(&query)
            .bind(project_id)
            .bind(input.sign_type_id)
            .bind(&input.location_ref)
            .bind(input.width_in)
            .bind(input.height_in)
            .bind(input.unit_price)
            .bind(input.quantity)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a sign by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Sign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM signs WHERE id = ?");
        sqlx::query_as::<_, Sign>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all signs for a project, oldest first.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<Sign>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM signs WHERE project_id = ? ORDER BY id ASC");
        sqlx::query_as::<_, Sign>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a sign. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateSign,
    ) -> Result<Option<Sign>, sqlx::Error> {
        let query = format!(
            "UPDATE signs SET
                location_ref = COALESCE(?, location_ref),
                width_in = COALESCE(?, width_in),
                height_in = COALESCE(?, height_in),
                unit_price = COALESCE(?, unit_price),
                quantity = COALESCE(?, quantity),
                status = COALESCE(?, status),
                updated_at = CURRENT_TIMESTAMP
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sign>(&query)
            .bind(&input.location_ref)
            .bind(input.width_in)
            .bind(input.height_in)
            .bind(input.unit_price)
            .bind(input.quantity)
            .bind(&input.status)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The pricing-relevant slice of a project's signs, fed to the ROM
    /// rollup computation.
    pub async fn pricing_lines(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<SignLine>, sqlx::Error> {
        let rows: Vec<(f64, i64)> =
            sqlx::query_as("SELECT unit_price, quantity FROM signs WHERE project_id = ?")
                .bind(project_id)
                .fetch_all(pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|(unit_price, quantity)| SignLine {
                unit_price,
                quantity,
            })
            .collect())
    }
}
