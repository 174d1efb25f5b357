//! Handlers for the `/comments` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use signops_core::entity_ref::CommentEntity;
use signops_core::error::CoreError;
use signops_core::takeoff::validate_normalized;
use signops_core::types::DbId;
use signops_db::models::comment::{Comment, CommentWithAuthor, CreateComment};
use signops_db::repositories::{CommentRepo, ProofRepo, SignRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for the comment listing.
#[derive(Debug, Deserialize)]
pub struct CommentQuery {
    pub entity_type: String,
    pub entity_id: DbId,
}

/// GET /api/comments?entity_type=&entity_id=
///
/// Comments on an entity, oldest first, joined with each author's display
/// name.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CommentQuery>,
) -> AppResult<Json<Vec<CommentWithAuthor>>> {
    let entity = CommentEntity::parse(&query.entity_type)?;
    let comments =
        CommentRepo::list_for_entity(&state.pool, entity.as_str(), query.entity_id).await?;
    Ok(Json(comments))
}

/// POST /api/comments
///
/// Requires an authenticated session; the comment is owned by the calling
/// user. The entity pair must resolve to an existing sign or proof, and
/// pin coordinates, when present, must be normalized to [0, 1].
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateComment>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let entity = CommentEntity::parse(&input.entity_type)?;
    match entity {
        CommentEntity::Sign => {
            SignRepo::find_by_id(&state.pool, input.entity_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Sign",
                    id: input.entity_id,
                }))?;
        }
        CommentEntity::Proof => {
            ProofRepo::find_by_id(&state.pool, input.entity_id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Proof",
                    id: input.entity_id,
                }))?;
        }
    }

    if let Some(x) = input.pinned_x {
        validate_normalized("pinned_x", x)?;
    }
    if let Some(y) = input.pinned_y {
        validate_normalized("pinned_y", y)?;
    }
    if input.body.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment body must not be empty".into(),
        )));
    }

    let comment = CommentRepo::create(&state.pool, auth.user.id, &input).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}
