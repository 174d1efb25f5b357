//! Repository for the `rom_pricing` table.

use signops_core::pricing::RomBreakdown;
use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::rom_pricing::RomPricing;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, signage_subtotal, installation, permits, total, created_at, updated_at";

/// Provides read/upsert operations for the per-project ROM rollup row.
pub struct RomPricingRepo;

impl RomPricingRepo {
    /// Find the rollup row for a project.
    pub async fn find_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Option<RomPricing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rom_pricing WHERE project_id = ?");
        sqlx::query_as::<_, RomPricing>(&query)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// Write the rollup for a project, replacing any previous row.
    pub async fn upsert(
        pool: &SqlitePool,
        project_id: DbId,
        breakdown: &RomBreakdown,
    ) -> Result<RomPricing, sqlx::Error> {
        let query = format!(
            "INSERT INTO rom_pricing (project_id, signage_subtotal, installation, permits, total)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT (project_id) DO UPDATE SET
                signage_subtotal = excluded.signage_subtotal,
                installation = excluded.installation,
                permits = excluded.permits,
                total = excluded.total,
                updated_at = CURRENT_TIMESTAMP
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RomPricing>(&query)
            .bind(project_id)
            .bind(breakdown.signage_subtotal)
            .bind(breakdown.installation)
            .bind(breakdown.permits)
            .bind(breakdown.total)
            .fetch_one(pool)
            .await
    }
}
