//! Vendor, RFQ, and bid models and DTOs.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/* --------------------------------------------------------------------------
   Vendors
   -------------------------------------------------------------------------- */

/// A row from the `vendors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vendor {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a vendor directory entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendor {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/* --------------------------------------------------------------------------
   RFQs
   -------------------------------------------------------------------------- */

/// A row from the `rfqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rfq {
    pub id: DbId,
    pub project_id: DbId,
    pub scope: String,
    pub due_date: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an RFQ under a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRfq {
    pub scope: String,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

/// Listing aggregate: an RFQ joined with its bid count and lowest bid.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RfqSummary {
    pub id: DbId,
    pub project_id: DbId,
    pub scope: String,
    pub due_date: Option<String>,
    pub status: String,
    pub bid_count: i64,
    pub lowest_bid: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/* --------------------------------------------------------------------------
   Bids
   -------------------------------------------------------------------------- */

/// A row from the `bids` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bid {
    pub id: DbId,
    pub rfq_id: DbId,
    pub vendor_id: DbId,
    pub price: f64,
    pub lead_time_weeks: Option<i64>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for attaching a vendor's bid to an RFQ.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBid {
    pub vendor_id: DbId,
    pub price: f64,
    pub lead_time_weeks: Option<i64>,
    pub notes: Option<String>,
}
