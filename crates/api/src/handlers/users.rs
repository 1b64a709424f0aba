//! Handlers for user accounts.
//!
//! Requests arrive pre-authenticated; password hashing here is a
//! placeholder because the real credential pipeline lives outside this
//! service.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use inkstone_core::error::CoreError;
use inkstone_core::types::DbId;
use inkstone_db::models::user::{CreateUser, UpdateUser, UserResponse};
use inkstone_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::ensure_user_exists;

/// POST /users -- register a new account.
pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    // Placeholder hash; see the non-goals in DESIGN.md.
    let password_hash = format!("hashed_{}", input.password);
    let created = UserRepo::create(&state.pool, &input, &password_hash).await?;
    tracing::info!(id = created.id, username = %created.username, "User created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(created),
        }),
    ))
}

/// GET /users -- list all users.
pub async fn list_users(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let users = UserRepo::list(&state.pool).await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(DataResponse {
        data: users
            .into_iter()
            .map(UserResponse::from)
            .collect::<Vec<_>>(),
    }))
}

/// GET /users/{id} -- fetch a single user.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = ensure_user_exists(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}

/// PUT /users/{id} -- partially update a user profile.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, id).await?;

    let updated = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;
    tracing::info!(id = updated.id, "User updated");
    Ok(Json(DataResponse {
        data: UserResponse::from(updated),
    }))
}
