//! Comment model and DTOs.
//!
//! Comments pin to an `(entity_type, entity_id)` pair — a sign or a proof —
//! with optional normalized pin coordinates.

use serde::{Deserialize, Serialize};
use signops_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub user_id: DbId,
    pub entity_type: String,
    pub entity_id: DbId,
    pub body: String,
    pub pinned_x: Option<f64>,
    pub pinned_y: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for creating a new comment. The author comes from the session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub entity_type: String,
    pub entity_id: DbId,
    pub body: String,
    pub pinned_x: Option<f64>,
    pub pinned_y: Option<f64>,
}

/// Listing aggregate: a comment joined with its author's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub user_id: DbId,
    pub author_name: String,
    pub entity_type: String,
    pub entity_id: DbId,
    pub body: String,
    pub pinned_x: Option<f64>,
    pub pinned_y: Option<f64>,
    pub created_at: Timestamp,
}
