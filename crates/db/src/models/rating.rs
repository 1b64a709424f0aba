//! Rating entity model and DTOs.

use inkstone_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `ratings` table. At most one per `(user_id, novel_id)`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub user_id: DbId,
    pub novel_id: DbId,
    pub rating: i32,
    pub review: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a rating. Resubmitting for the same `(user, novel)`
/// pair updates the existing row in place.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRating {
    pub user_id: DbId,
    pub novel_id: DbId,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    pub review: Option<String>,
}
