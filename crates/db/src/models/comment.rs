//! Chapter comment model and DTOs.

use inkstone_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comments` table.
///
/// `parent_id`, when set, references another comment on the SAME chapter
/// (thread integrity; cross-chapter replies are rejected).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub user_id: DbId,
    pub chapter_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub likes: i32,
    pub is_deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a comment or threaded reply.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub user_id: DbId,
    pub chapter_id: DbId,
    pub content: String,
    pub parent_id: Option<DbId>,
}
