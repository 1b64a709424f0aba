//! Repository for the `chapters` table.
//!
//! Chapter creation and the owning novel's `total_chapters` bump commit
//! as one transaction, so `novels.total_chapters` always equals the count
//! of chapter rows a reader can observe.

use inkstone_core::publishing;
use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::chapter::{Chapter, CreateChapter, UpdateChapter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, novel_id, chapter_number, title, content, word_count, status, \
                        is_premium, coin_cost, views, likes, published_at, created_at, updated_at";

/// Provides CRUD operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter and increment the owning novel's
    /// `total_chapters`, atomically.
    ///
    /// `word_count` is derived from the content; `published_at` is set to
    /// the insert clock iff the chapter is created as `published`.
    pub async fn create(pool: &PgPool, input: &CreateChapter) -> Result<Chapter, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let word_count = publishing::word_count(&input.content);
        let insert_query = format!(
            "INSERT INTO chapters \
                (novel_id, chapter_number, title, content, word_count, status, is_premium, coin_cost, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, \
                     CASE WHEN $6 = 'published'::chapter_status THEN NOW() END) \
             RETURNING {COLUMNS}"
        );
        let chapter = sqlx::query_as::<_, Chapter>(&insert_query)
            .bind(input.novel_id)
            .bind(input.chapter_number)
            .bind(&input.title)
            .bind(&input.content)
            .bind(word_count)
            .bind(input.status)
            .bind(input.is_premium)
            .bind(input.coin_cost)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE novels SET total_chapters = total_chapters + 1, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(input.novel_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(chapter)
    }

    /// Find a chapter by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chapters WHERE id = $1");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a chapter by its position within a novel.
    pub async fn find_by_novel_and_number(
        pool: &PgPool,
        novel_id: DbId,
        chapter_number: i32,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM chapters WHERE novel_id = $1 AND chapter_number = $2");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(novel_id)
            .bind(chapter_number)
            .fetch_optional(pool)
            .await
    }

    /// List a novel's chapters in reading order.
    pub async fn list_by_novel(pool: &PgPool, novel_id: DbId) -> Result<Vec<Chapter>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM chapters WHERE novel_id = $1 ORDER BY chapter_number");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }

    /// Update a chapter. Absent fields are left unchanged.
    ///
    /// `word_count` is recomputed only when `content` is supplied, and
    /// `published_at` follows the publication state machine whenever
    /// `status` is supplied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChapter,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let current = match Self::find_by_id(pool, id).await? {
            Some(chapter) => chapter,
            None => return Ok(None),
        };

        let word_count = match &input.content {
            Some(content) => publishing::word_count(content),
            None => current.word_count,
        };
        let next_status = input.status.unwrap_or(current.status);
        let published_at = publishing::resolve_published_at(
            current.status.is_published(),
            next_status.is_published(),
            current.published_at,
            chrono::Utc::now(),
        );

        let query = format!(
            "UPDATE chapters SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                word_count = $4,
                status = COALESCE($5, status),
                is_premium = COALESCE($6, is_premium),
                coin_cost = COALESCE($7, coin_cost),
                published_at = $8,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(word_count)
            .bind(input.status)
            .bind(input.is_premium)
            .bind(input.coin_cost)
            .bind(published_at)
            .fetch_optional(pool)
            .await
    }
}
