//! Repository for the `novels` table.
//!
//! The denormalized counters on a novel (`total_chapters`,
//! `average_rating`) are maintained by [`crate::repositories::ChapterRepo`]
//! and [`crate::repositories::RatingRepo`] inside their own transactions,
//! not here.

use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::novel::{CreateNovel, Novel, UpdateNovel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, cover_image_url, author_id, status, \
                        genre_id, total_chapters, total_views, total_likes, average_rating, \
                        is_featured, is_premium, created_at, updated_at";

/// Provides CRUD operations for novels.
pub struct NovelRepo;

impl NovelRepo {
    /// Insert a new novel, returning the created row. Counters start at
    /// zero and `average_rating` at NULL.
    pub async fn create(pool: &PgPool, input: &CreateNovel) -> Result<Novel, sqlx::Error> {
        let query = format!(
            "INSERT INTO novels (title, slug, description, cover_image_url, author_id, status, genre_id, is_premium)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.cover_image_url)
            .bind(input.author_id)
            .bind(input.status)
            .bind(input.genre_id)
            .bind(input.is_premium)
            .fetch_one(pool)
            .await
    }

    /// Find a novel by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novels WHERE id = $1");
        sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a novel by its unique slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novels WHERE slug = $1");
        sqlx::query_as::<_, Novel>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all novels ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Novel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM novels ORDER BY created_at DESC");
        sqlx::query_as::<_, Novel>(&query).fetch_all(pool).await
    }

    /// Update a novel. Absent fields are left unchanged; double-`Option`
    /// fields distinguish "leave alone" from "clear to NULL".
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNovel,
    ) -> Result<Option<Novel>, sqlx::Error> {
        let query = format!(
            "UPDATE novels SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                cover_image_url = CASE WHEN $5 THEN $6 ELSE cover_image_url END,
                status = COALESCE($7, status),
                genre_id = COALESCE($8, genre_id),
                is_featured = COALESCE($9, is_featured),
                is_premium = COALESCE($10, is_premium),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Novel>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.description.is_some())
            .bind(input.description.clone().flatten())
            .bind(input.cover_image_url.is_some())
            .bind(input.cover_image_url.clone().flatten())
            .bind(input.status)
            .bind(input.genre_id)
            .bind(input.is_featured)
            .bind(input.is_premium)
            .fetch_optional(pool)
            .await
    }
}
