//! ROM pricing rollup model.
//!
//! Pure derived state: one row per project, rewritten by every
//! recomputation from the current sign rows.

use serde::Serialize;
use signops_core::pricing::RomBreakdown;
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `rom_pricing` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RomPricing {
    pub id: DbId,
    pub project_id: DbId,
    pub signage_subtotal: f64,
    pub installation: f64,
    pub permits: f64,
    pub total: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API shape: summary total plus the nested breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct RomPricingView {
    pub project_id: DbId,
    pub total: f64,
    pub breakdown: RomBreakdown,
    pub updated_at: Timestamp,
}

impl From<RomPricing> for RomPricingView {
    fn from(row: RomPricing) -> Self {
        Self {
            project_id: row.project_id,
            total: row.total,
            breakdown: RomBreakdown {
                signage_subtotal: row.signage_subtotal,
                installation: row.installation,
                permits: row.permits,
                total: row.total,
            },
            updated_at: row.updated_at,
        }
    }
}
