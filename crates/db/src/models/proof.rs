//! Proof and proof item models and DTOs.
//!
//! A proof is a reviewable canvas layout of a project's signs. Each project
//! has at most one, created lazily on first fetch.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `proofs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proof {
    pub id: DbId,
    pub project_id: DbId,
    pub version: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `proof_items` table: a sign positioned on the canvas,
/// coordinates and extents normalized to [0, 1].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProofItem {
    pub id: DbId,
    pub proof_id: DbId,
    pub sign_id: DbId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub created_at: Timestamp,
}

/// DTO for placing a sign on the proof canvas.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProofItem {
    pub sign_id: DbId,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// A proof with its positioned items, as served by the proof fetch.
#[derive(Debug, Clone, Serialize)]
pub struct ProofDetail {
    #[serde(flatten)]
    pub proof: Proof,
    pub items: Vec<ProofItem>,
}
