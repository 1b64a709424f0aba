//! Personal library membership model and DTOs.

use inkstone_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `library` table. At most one per `(user_id, novel_id)`;
/// unlike reading progress, inserting a duplicate is a hard Conflict.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LibraryEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub novel_id: DbId,
    pub is_favorite: bool,
    pub added_at: Timestamp,
}

/// DTO for adding a novel to a user's library.
#[derive(Debug, Deserialize)]
pub struct AddToLibrary {
    pub user_id: DbId,
    pub novel_id: DbId,
    #[serde(default)]
    pub is_favorite: bool,
}
