//! Repository for the `proofs` and `proof_items` tables.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::proof::{CreateProofItem, Proof, ProofItem};

/// Column list for proofs queries.
const PROOF_COLUMNS: &str = "id, project_id, version, status, created_at, updated_at";

/// Column list for proof_items queries.
const ITEM_COLUMNS: &str = "id, proof_id, sign_id, x, y, w, h, created_at";

/// Provides operations for proofs and their canvas items.
pub struct ProofRepo;

impl ProofRepo {
    /// Fetch a project's proof, creating one with the default version and
    /// status on first access. Idempotent: concurrent callers converge on
    /// the same row via the unique `project_id` constraint.
    pub async fn find_or_create_for_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Proof, sqlx::Error> {
        sqlx::query("INSERT INTO proofs (project_id) VALUES (?) ON CONFLICT (project_id) DO NOTHING")
            .bind(project_id)
            .execute(pool)
            .await?;

        let query = format!("SELECT {PROOF_COLUMNS} FROM proofs WHERE project_id = ?");
        sqlx::query_as::<_, Proof>(&query)
            .bind(project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a proof by its internal ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Proof>, sqlx::Error> {
        let query = format!("SELECT {PROOF_COLUMNS} FROM proofs WHERE id = ?");
        sqlx::query_as::<_, Proof>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Place a sign on the proof canvas, returning the created item.
    pub async fn add_item(
        pool: &SqlitePool,
        proof_id: DbId,
        input: &CreateProofItem,
    ) -> Result<ProofItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO proof_items (proof_id, sign_id, x, y, w, h)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, ProofItem>(&query)
            .bind(proof_id)
            .bind(input.sign_id)
            .bind(input.x)
            .bind(input.y)
            .bind(input.w)
            .bind(input.h)
            .fetch_one(pool)
            .await
    }

    /// List a proof's canvas items, oldest first.
    pub async fn list_items(
        pool: &SqlitePool,
        proof_id: DbId,
    ) -> Result<Vec<ProofItem>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM proof_items WHERE proof_id = ? ORDER BY id ASC");
        sqlx::query_as::<_, ProofItem>(&query)
            .bind(proof_id)
            .fetch_all(pool)
            .await
    }
}
