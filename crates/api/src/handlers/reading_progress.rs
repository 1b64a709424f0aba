//! Handlers for reading-progress tracking.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;

use inkstone_core::error::CoreError;
use inkstone_core::types::DbId;
use inkstone_db::models::reading_progress::UpsertReadingProgress;
use inkstone_db::repositories::ReadingProgressRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::{ensure_chapter_exists, ensure_novel_exists, ensure_user_exists};

/// PUT /reading-progress -- create or refresh the caller's progress on a
/// novel. Exactly one row exists per `(user, novel)` pair afterward.
pub async fn update_reading_progress(
    State(state): State<AppState>,
    Json(input): Json<UpsertReadingProgress>,
) -> AppResult<impl IntoResponse> {
    if input.progress_percentage < Decimal::ZERO
        || input.progress_percentage > Decimal::from(100)
    {
        return Err(CoreError::Validation(
            "progress_percentage must lie in [0, 100]".to_string(),
        )
        .into());
    }

    ensure_user_exists(&state.pool, input.user_id).await?;
    ensure_novel_exists(&state.pool, input.novel_id).await?;
    ensure_chapter_exists(&state.pool, input.chapter_id).await?;

    let progress = ReadingProgressRepo::upsert(&state.pool, &input).await?;
    tracing::debug!(
        user_id = progress.user_id,
        novel_id = progress.novel_id,
        chapter_id = progress.chapter_id,
        "Reading progress updated"
    );
    Ok(Json(DataResponse { data: progress }))
}

/// GET /users/{id}/reading-progress -- list a user's progress rows.
pub async fn list_reading_progress(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;
    let rows = ReadingProgressRepo::list_by_user(&state.pool, user_id).await?;
    tracing::debug!(user_id, count = rows.len(), "Listed reading progress");
    Ok(Json(DataResponse { data: rows }))
}
