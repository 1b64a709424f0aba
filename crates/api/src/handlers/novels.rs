//! Handlers for novels.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use inkstone_core::error::CoreError;
use inkstone_core::types::DbId;
use inkstone_db::models::novel::{CreateNovel, UpdateNovel};
use inkstone_db::models::user::UserRole;
use inkstone_db::repositories::NovelRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::{ensure_genre_exists, ensure_novel_exists, ensure_user_exists};

/// POST /novels -- publish a new novel shell.
///
/// The author must exist and hold the `writer` or `admin` role; the
/// genre must exist; the slug must be unique.
pub async fn create_novel(
    State(state): State<AppState>,
    Json(input): Json<CreateNovel>,
) -> AppResult<impl IntoResponse> {
    let author = ensure_user_exists(&state.pool, input.author_id).await?;
    if !matches!(author.role, UserRole::Writer | UserRole::Admin) {
        return Err(CoreError::InvalidOperation(format!(
            "user {} does not have permission to create novels",
            author.id
        ))
        .into());
    }

    ensure_genre_exists(&state.pool, input.genre_id).await?;

    if NovelRepo::find_by_slug(&state.pool, &input.slug).await?.is_some() {
        return Err(CoreError::Conflict(format!(
            "a novel with slug '{}' already exists",
            input.slug
        ))
        .into());
    }

    let created = NovelRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, slug = %created.slug, "Novel created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /novels -- list all novels.
pub async fn list_novels(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let novels = NovelRepo::list(&state.pool).await?;
    tracing::debug!(count = novels.len(), "Listed novels");
    Ok(Json(DataResponse { data: novels }))
}

/// GET /novels/{id} -- fetch a single novel.
pub async fn get_novel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let novel = ensure_novel_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: novel }))
}

/// PUT /novels/{id} -- partially update a novel.
pub async fn update_novel(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNovel>,
) -> AppResult<impl IntoResponse> {
    ensure_novel_exists(&state.pool, id).await?;

    if let Some(genre_id) = input.genre_id {
        ensure_genre_exists(&state.pool, genre_id).await?;
    }

    let updated = NovelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Novel", id })?;
    tracing::info!(id = updated.id, "Novel updated");
    Ok(Json(DataResponse { data: updated }))
}
