//! Repository for the `rfqs` and `bids` tables.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::vendor::{Bid, CreateBid, CreateRfq, Rfq, RfqSummary};

/// Column list for rfqs queries.
const RFQ_COLUMNS: &str = "id, project_id, scope, due_date, status, created_at, updated_at";

/// Column list for bids queries.
const BID_COLUMNS: &str = "id, rfq_id, vendor_id, price, lead_time_weeks, notes, created_at";

/// Provides CRUD operations for RFQs and their bids.
pub struct RfqRepo;

impl RfqRepo {
    /// Insert a new RFQ under a project, returning the created row.
    ///
    /// `status` defaults to `open`.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateRfq,
    ) -> Result<Rfq, sqlx::Error> {
        let query = format!(
            "INSERT INTO rfqs (project_id, scope, due_date, status)
             VALUES (?, ?, ?, COALESCE(?, 'open'))
             RETURNING {RFQ_COLUMNS}"
        );
        sqlx::query_as::<_, Rfq>(&query)
            .bind(project_id)
            .bind(&input.scope)
            .bind(&input.due_date)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an RFQ by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Rfq>, sqlx::Error> {
        let query = format!("SELECT {RFQ_COLUMNS} FROM rfqs WHERE id = ?");
        sqlx::query_as::<_, Rfq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's RFQs joined with each one's bid count and lowest
    /// bid price, most recent first.
    pub async fn list_summaries_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<RfqSummary>, sqlx::Error> {
        sqlx::query_as::<_, RfqSummary>(
            "SELECT r.id, r.project_id, r.scope, r.due_date, r.status,
                    COUNT(b.id) AS bid_count,
                    MIN(b.price) AS lowest_bid,
                    r.created_at, r.updated_at
             FROM rfqs r
             LEFT JOIN bids b ON b.rfq_id = r.id
             WHERE r.project_id = ?
             GROUP BY r.id
             ORDER BY r.created_at DESC, r.id DESC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Attach a vendor's bid to an RFQ, returning the created row.
    pub async fn create_bid(
        pool: &SqlitePool,
        rfq_id: DbId,
        input: &CreateBid,
    ) -> Result<Bid, sqlx::Error> {
        let query = format!(
            "INSERT INTO bids (rfq_id, vendor_id, price, lead_time_weeks, notes)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {BID_COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(rfq_id)
            .bind(input.vendor_id)
            .bind(input.price)
            .bind(input.lead_time_weeks)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// List an RFQ's bids, lowest price first.
    pub async fn list_bids(pool: &SqlitePool, rfq_id: DbId) -> Result<Vec<Bid>, sqlx::Error> {
        let query = format!("SELECT {BID_COLUMNS} FROM bids WHERE rfq_id = ? ORDER BY price ASC");
        sqlx::query_as::<_, Bid>(&query)
            .bind(rfq_id)
            .fetch_all(pool)
            .await
    }
}
