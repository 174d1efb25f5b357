//! Repository for the `master_sign_types` table.

use sqlx::SqlitePool;

use crate::models::sign_type::{CreateMasterSignType, MasterSignType};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, category, created_at";

/// Provides CRUD operations for the studio-level sign type directory.
pub struct MasterSignTypeRepo;

impl MasterSignTypeRepo {
    /// Insert a new master sign type, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMasterSignType,
    ) -> Result<MasterSignType, sqlx::Error> {
        let query = format!(
            "INSERT INTO master_sign_types (name, category)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MasterSignType>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// List the full directory ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<MasterSignType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM master_sign_types ORDER BY name ASC");
        sqlx::query_as::<_, MasterSignType>(&query)
            .fetch_all(pool)
            .await
    }
}
