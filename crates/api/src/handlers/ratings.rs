//! Handlers for rating submission and listing.
//!
//! Submission is an upsert: a user re-rating a novel updates their
//! existing row, and the novel's `average_rating` is recomputed inside
//! the same transaction either way.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use inkstone_core::types::DbId;
use inkstone_db::models::rating::SubmitRating;
use inkstone_db::repositories::RatingRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

use super::{ensure_novel_exists, ensure_user_exists};

/// POST /ratings -- submit or revise a rating.
pub async fn submit_rating(
    State(state): State<AppState>,
    Json(input): Json<SubmitRating>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    ensure_user_exists(&state.pool, input.user_id).await?;
    ensure_novel_exists(&state.pool, input.novel_id).await?;

    let rating = RatingRepo::submit(&state.pool, &input).await?;
    tracing::info!(
        id = rating.id,
        novel_id = rating.novel_id,
        user_id = rating.user_id,
        rating = rating.rating,
        "Rating submitted"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: rating })))
}

/// GET /novels/{id}/ratings -- list a novel's ratings.
pub async fn list_ratings(
    State(state): State<AppState>,
    Path(novel_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_novel_exists(&state.pool, novel_id).await?;
    let ratings = RatingRepo::list_by_novel(&state.pool, novel_id).await?;
    tracing::debug!(novel_id, count = ratings.len(), "Listed ratings");
    Ok(Json(DataResponse { data: ratings }))
}
