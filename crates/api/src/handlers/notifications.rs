//! Handlers for in-app notifications.
//!
//! Delivery channels are out of scope; this layer only records and
//! lists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use inkstone_core::types::DbId;
use inkstone_db::models::notification::CreateNotification;
use inkstone_db::repositories::NotificationRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::ensure_user_exists;

/// POST /notifications -- record a notification for a user.
pub async fn create_notification(
    State(state): State<AppState>,
    Json(input): Json<CreateNotification>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, input.user_id).await?;

    let created = NotificationRepo::create(&state.pool, &input).await?;
    tracing::info!(id = created.id, user_id = created.user_id, "Notification created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /users/{id}/notifications -- list a user's notifications.
pub async fn list_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;
    let notifications = NotificationRepo::list_by_user(&state.pool, user_id).await?;
    tracing::debug!(user_id, count = notifications.len(), "Listed notifications");
    Ok(Json(DataResponse { data: notifications }))
}
