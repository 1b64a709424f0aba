//! Follow edge model and DTOs.

use inkstone_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A directed follower edge from the `follows` table. Self-loops and
/// duplicate edges are forbidden.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Follow {
    pub id: DbId,
    pub follower_id: DbId,
    pub following_id: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating a follow edge.
#[derive(Debug, Deserialize)]
pub struct CreateFollow {
    pub follower_id: DbId,
    pub following_id: DbId,
}
