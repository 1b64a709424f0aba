//! Handlers for follow relationships.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use inkstone_core::error::CoreError;
use inkstone_db::models::follow::CreateFollow;
use inkstone_db::repositories::FollowRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::ensure_user_exists;

/// POST /follows -- create a directed follow edge.
pub async fn create_follow(
    State(state): State<AppState>,
    Json(input): Json<CreateFollow>,
) -> AppResult<impl IntoResponse> {
    if input.follower_id == input.following_id {
        return Err(CoreError::InvalidOperation(
            "users cannot follow themselves".to_string(),
        )
        .into());
    }

    ensure_user_exists(&state.pool, input.follower_id).await?;
    ensure_user_exists(&state.pool, input.following_id).await?;

    if FollowRepo::find_edge(&state.pool, input.follower_id, input.following_id)
        .await?
        .is_some()
    {
        return Err(CoreError::Conflict(format!(
            "user {} already follows user {}",
            input.follower_id, input.following_id
        ))
        .into());
    }

    let follow = FollowRepo::create(&state.pool, &input).await?;
    tracing::info!(
        follower_id = follow.follower_id,
        following_id = follow.following_id,
        "Follow created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: follow })))
}
