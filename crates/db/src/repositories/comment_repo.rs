//! Repository for the `comments` table.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, entity_type, entity_id, body, pinned_x, pinned_y, created_at";

/// Provides CRUD operations for pinned comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment authored by `user_id`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        user_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (user_id, entity_type, entity_id, body, pinned_x, pinned_y)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(user_id)
            .bind(&input.entity_type)
            .bind(input.entity_id)
            .bind(&input.body)
            .bind(input.pinned_x)
            .bind(input.pinned_y)
            .fetch_one(pool)
            .await
    }

    /// List all comments on an entity joined with the author's display
    /// name, oldest first.
    pub async fn list_for_entity(
        pool: &SqlitePool,
        entity_type: &str,
        entity_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.user_id, u.display_name AS author_name,
                    c.entity_type, c.entity_id, c.body, c.pinned_x, c.pinned_y, c.created_at
             FROM comments c
             INNER JOIN users u ON u.id = c.user_id
             WHERE c.entity_type = ? AND c.entity_id = ?
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(entity_type)
        .bind(entity_id)
        .fetch_all(pool)
        .await
    }
}
