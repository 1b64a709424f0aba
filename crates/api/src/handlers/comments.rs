//! Handlers for threaded chapter comments.
//!
//! A reply's parent must be a comment on the SAME chapter; replies that
//! point at a comment on another chapter fail the parent existence
//! check.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use inkstone_core::error::CoreError;
use inkstone_core::types::DbId;
use inkstone_db::models::comment::CreateComment;
use inkstone_db::repositories::CommentRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::{ensure_chapter_exists, ensure_user_exists};

/// POST /comments -- create a comment or threaded reply.
pub async fn create_comment(
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, input.user_id).await?;
    ensure_chapter_exists(&state.pool, input.chapter_id).await?;

    if let Some(parent_id) = input.parent_id {
        CommentRepo::find_reply_parent(&state.pool, parent_id, input.chapter_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Comment",
                id: parent_id,
            })?;
    }

    let comment = CommentRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = comment.id,
        chapter_id = comment.chapter_id,
        parent_id = ?comment.parent_id,
        "Comment created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /chapters/{id}/comments -- list a chapter's visible comments.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(chapter_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_chapter_exists(&state.pool, chapter_id).await?;
    let comments = CommentRepo::list_by_chapter(&state.pool, chapter_id).await?;
    tracing::debug!(chapter_id, count = comments.len(), "Listed comments");
    Ok(Json(DataResponse { data: comments }))
}
