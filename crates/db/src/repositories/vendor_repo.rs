//! Repository for the `vendors` table.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::vendor::{CreateVendor, Vendor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, created_at";

/// Provides CRUD operations for the vendor directory.
pub struct VendorRepo;

impl VendorRepo {
    /// Insert a new vendor, returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateVendor) -> Result<Vendor, sqlx::Error> {
        let query = format!(
            "INSERT INTO vendors (name, email, phone)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// Find a vendor by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors WHERE id = ?");
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full directory ordered by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors ORDER BY name ASC");
        sqlx::query_as::<_, Vendor>(&query).fetch_all(pool).await
    }
}
