//! Repository for the `reading_progress` table.
//!
//! Progress tracking is upsert-on-duplicate: `ON CONFLICT` on the
//! `(user_id, novel_id)` key guarantees exactly one row per pair, and
//! `last_read_at` refreshes on every write.

use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::reading_progress::{ReadingProgress, UpsertReadingProgress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, novel_id, chapter_id, progress_percentage, last_read_at, \
                        created_at, updated_at";

/// Provides reading-progress tracking.
pub struct ReadingProgressRepo;

impl ReadingProgressRepo {
    /// Insert or update the user's progress on a novel. Creates if
    /// absent, otherwise replaces `chapter_id` and
    /// `progress_percentage` and refreshes `last_read_at`.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertReadingProgress,
    ) -> Result<ReadingProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO reading_progress (user_id, novel_id, chapter_id, progress_percentage) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, novel_id) DO UPDATE \
             SET chapter_id = EXCLUDED.chapter_id, \
                 progress_percentage = EXCLUDED.progress_percentage, \
                 last_read_at = NOW(), \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReadingProgress>(&query)
            .bind(input.user_id)
            .bind(input.novel_id)
            .bind(input.chapter_id)
            .bind(input.progress_percentage)
            .fetch_one(pool)
            .await
    }

    /// Find a user's progress on a novel.
    pub async fn find_by_user_and_novel(
        pool: &PgPool,
        user_id: DbId,
        novel_id: DbId,
    ) -> Result<Option<ReadingProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reading_progress WHERE user_id = $1 AND novel_id = $2"
        );
        sqlx::query_as::<_, ReadingProgress>(&query)
            .bind(user_id)
            .bind(novel_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's progress rows, most recently read first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ReadingProgress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reading_progress WHERE user_id = $1 ORDER BY last_read_at DESC"
        );
        sqlx::query_as::<_, ReadingProgress>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
