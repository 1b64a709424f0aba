//! Handlers for chapter lifecycle.
//!
//! Creation bumps the owning novel's `total_chapters` atomically with
//! the insert; updates run the publication state machine whenever a
//! status is supplied.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use inkstone_core::error::CoreError;
use inkstone_core::types::DbId;
use inkstone_db::models::chapter::{CreateChapter, UpdateChapter};
use inkstone_db::repositories::ChapterRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

use super::{ensure_chapter_exists, ensure_novel_exists, ensure_user_exists};

/// POST /chapters -- create a chapter under a novel.
pub async fn create_chapter(
    State(state): State<AppState>,
    Json(input): Json<CreateChapter>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let novel = ensure_novel_exists(&state.pool, input.novel_id).await?;
    ensure_user_exists(&state.pool, novel.author_id).await?;

    if ChapterRepo::find_by_novel_and_number(&state.pool, input.novel_id, input.chapter_number)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(format!(
            "chapter {} already exists for novel {}",
            input.chapter_number, input.novel_id
        ))
        .into());
    }

    let created = ChapterRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = created.id,
        novel_id = created.novel_id,
        chapter_number = created.chapter_number,
        word_count = created.word_count,
        "Chapter created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// PUT /chapters/{id} -- partially update a chapter.
pub async fn update_chapter(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChapter>,
) -> AppResult<impl IntoResponse> {
    let updated = ChapterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Chapter",
            id,
        })?;
    tracing::info!(id = updated.id, status = ?updated.status, "Chapter updated");
    Ok(Json(DataResponse { data: updated }))
}

/// GET /novels/{id}/chapters -- list a novel's chapters in reading order.
pub async fn list_chapters(
    State(state): State<AppState>,
    Path(novel_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_novel_exists(&state.pool, novel_id).await?;
    let chapters = ChapterRepo::list_by_novel(&state.pool, novel_id).await?;
    tracing::debug!(novel_id, count = chapters.len(), "Listed chapters");
    Ok(Json(DataResponse { data: chapters }))
}

/// GET /chapters/{id} -- fetch a single chapter.
pub async fn get_chapter(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let chapter = ensure_chapter_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: chapter }))
}
