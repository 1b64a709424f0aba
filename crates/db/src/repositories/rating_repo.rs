//! Repository for the `ratings` table.
//!
//! A rating submission is an upsert keyed on `(user_id, novel_id)`
//! followed by a recompute of the novel's `average_rating`, all in one
//! transaction. The novel row is locked first so two concurrent
//! submissions for the same novel serialize and neither recomputes the
//! mean from a stale snapshot.

use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::{Rating, SubmitRating};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, novel_id, rating, review, created_at, updated_at";

/// Provides rating submission and listing.
pub struct RatingRepo;

impl RatingRepo {
    /// Upsert a user's rating for a novel and refresh the novel's
    /// `average_rating` to the mean of all current ratings.
    ///
    /// Resubmission updates the existing row in place; at most one row
    /// exists per `(user, novel)` pair. The new average is visible as
    /// soon as this call returns.
    pub async fn submit(pool: &PgPool, input: &SubmitRating) -> Result<Rating, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Serialize concurrent submissions per novel.
        sqlx::query("SELECT id FROM novels WHERE id = $1 FOR UPDATE")
            .bind(input.novel_id)
            .execute(&mut *tx)
            .await?;

        let upsert_query = format!(
            "INSERT INTO ratings (user_id, novel_id, rating, review) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (user_id, novel_id) DO UPDATE \
             SET rating = EXCLUDED.rating, \
                 review = EXCLUDED.review, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        let rating = sqlx::query_as::<_, Rating>(&upsert_query)
            .bind(input.user_id)
            .bind(input.novel_id)
            .bind(input.rating)
            .bind(&input.review)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE novels SET \
                average_rating = (SELECT AVG(rating)::numeric(3,2) FROM ratings WHERE novel_id = $1), \
                updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(input.novel_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(rating)
    }

    /// List all ratings for a novel, newest first.
    pub async fn list_by_novel(pool: &PgPool, novel_id: DbId) -> Result<Vec<Rating>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM ratings WHERE novel_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Rating>(&query)
            .bind(novel_id)
            .fetch_all(pool)
            .await
    }
}
