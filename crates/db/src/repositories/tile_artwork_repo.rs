//! Repository for the `tile_artworks` table.

use signops_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::sign::{TileArtwork, UpsertTileArtwork};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sign_id, params, version, created_at, updated_at";

/// Provides read/upsert operations for sign artwork records.
pub struct TileArtworkRepo;

impl TileArtworkRepo {
    /// Find the artwork record for a sign.
    pub async fn find_by_sign(
        pool: &SqlitePool,
        sign_id: DbId,
    ) -> Result<Option<TileArtwork>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tile_artworks WHERE sign_id = ?");
        sqlx::query_as::<_, TileArtwork>(&query)
            .bind(sign_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a sign's artwork record.
    ///
    /// Omitted fields keep their previous value on replace; a fresh insert
    /// falls back to empty params and version `v1.0`.
    pub async fn upsert(
        pool: &SqlitePool,
        sign_id: DbId,
        input: &UpsertTileArtwork,
    ) -> Result<TileArtwork, sqlx::Error> {
        let query = format!(
            "INSERT INTO tile_artworks (sign_id, params, version)
             VALUES (?, COALESCE(?, '{{}}'), COALESCE(?, 'v1.0'))
             ON CONFLICT (sign_id) DO UPDATE SET
                params = COALESCE(excluded.params, params),
                version = COALESCE(excluded.version, version),
                updated_at = CURRENT_TIMESTAMP
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TileArtwork>(&query)
            .bind(sign_id)
            .bind(&input.params)
            .bind(&input.version)
            .fetch_one(pool)
            .await
    }

    /// Flag the artwork of every sign of a type as stale.
    ///
    /// Called when the type's spec page changes; sets `stale: true` inside
    /// each affected artwork's params JSON. Returns the number of rows
    /// touched.
    pub async fn mark_stale_for_sign_type(
        pool: &SqlitePool,
        sign_type_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tile_artworks
             SET params = json_set(params, '$.stale', json('true')),
                 updated_at = CURRENT_TIMESTAMP
             WHERE sign_id IN (SELECT id FROM signs WHERE sign_type_id = ?)",
        )
        .bind(sign_type_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
