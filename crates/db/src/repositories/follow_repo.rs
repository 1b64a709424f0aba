//! Repository for the `follows` table.

use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::follow::{CreateFollow, Follow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, follower_id, following_id, created_at";

/// Provides follow-edge operations.
pub struct FollowRepo;

impl FollowRepo {
    /// Insert a directed follow edge, returning the created row.
    ///
    /// Duplicate edges violate `uq_follows_edge`; callers pre-check and
    /// surface a Conflict. Self-follows are rejected before reaching
    /// this layer.
    pub async fn create(pool: &PgPool, input: &CreateFollow) -> Result<Follow, sqlx::Error> {
        let query = format!(
            "INSERT INTO follows (follower_id, following_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Follow>(&query)
            .bind(input.follower_id)
            .bind(input.following_id)
            .fetch_one(pool)
            .await
    }

    /// Find a specific directed edge, if it exists.
    pub async fn find_edge(
        pool: &PgPool,
        follower_id: DbId,
        following_id: DbId,
    ) -> Result<Option<Follow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM follows WHERE follower_id = $1 AND following_id = $2");
        sqlx::query_as::<_, Follow>(&query)
            .bind(follower_id)
            .bind(following_id)
            .fetch_optional(pool)
            .await
    }
}
