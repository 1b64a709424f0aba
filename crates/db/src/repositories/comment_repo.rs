//! Repository for the `comments` table.

use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, chapter_id, parent_id, content, likes, is_deleted, created_at, updated_at";

/// Provides comment creation and listing.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (user_id, chapter_id, parent_id, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.user_id)
            .bind(input.chapter_id)
            .bind(input.parent_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a comment that can serve as a reply parent on the given
    /// chapter.
    ///
    /// Returns `None` when the comment does not exist OR belongs to a
    /// different chapter, so cross-chapter replies fail the existence
    /// check.
    pub async fn find_reply_parent(
        pool: &PgPool,
        parent_id: DbId,
        chapter_id: DbId,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1 AND chapter_id = $2");
        sqlx::query_as::<_, Comment>(&query)
            .bind(parent_id)
            .bind(chapter_id)
            .fetch_optional(pool)
            .await
    }

    /// List a chapter's visible comments, oldest first.
    pub async fn list_by_chapter(
        pool: &PgPool,
        chapter_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments \
             WHERE chapter_id = $1 AND is_deleted = false \
             ORDER BY created_at"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(chapter_id)
            .fetch_all(pool)
            .await
    }
}
