//! Handlers for personal library membership.
//!
//! Adding the same novel twice is a hard Conflict -- deliberately NOT an
//! upsert, unlike reading progress.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use inkstone_core::error::CoreError;
use inkstone_core::types::DbId;
use inkstone_db::models::library::AddToLibrary;
use inkstone_db::repositories::LibraryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::{ensure_novel_exists, ensure_user_exists};

/// POST /library -- add a novel to a user's library.
pub async fn add_to_library(
    State(state): State<AppState>,
    Json(input): Json<AddToLibrary>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, input.user_id).await?;
    ensure_novel_exists(&state.pool, input.novel_id).await?;

    if LibraryRepo::find_by_user_and_novel(&state.pool, input.user_id, input.novel_id)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(format!(
            "novel {} is already in the library of user {}",
            input.novel_id, input.user_id
        ))
        .into());
    }

    let entry = LibraryRepo::add(&state.pool, &input).await?;
    tracing::info!(
        id = entry.id,
        user_id = entry.user_id,
        novel_id = entry.novel_id,
        "Library entry added"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /users/{id}/library -- list a user's library.
pub async fn list_library(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;
    let entries = LibraryRepo::list_by_user(&state.pool, user_id).await?;
    tracing::debug!(user_id, count = entries.len(), "Listed library");
    Ok(Json(DataResponse { data: entries }))
}
