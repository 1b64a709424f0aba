//! Handlers for the genre catalog.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use inkstone_db::models::genre::CreateGenre;
use inkstone_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for genre listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListGenresQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

/// POST /genres -- register a new genre.
pub async fn create_genre(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<impl IntoResponse> {
    let created = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, name = %created.name, "Genre created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /genres -- list genres (active only unless `include_inactive`).
pub async fn list_genres(
    State(state): State<AppState>,
    Query(query): Query<ListGenresQuery>,
) -> AppResult<impl IntoResponse> {
    let genres = GenreRepo::list(&state.pool, query.include_inactive).await?;
    tracing::debug!(count = genres.len(), "Listed genres");
    Ok(Json(DataResponse { data: genres }))
}
