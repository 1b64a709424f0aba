//! Repository for the `library` table.
//!
//! Library membership is reject-on-duplicate: adding a novel a second
//! time is a Conflict, NOT an upsert. This is intentionally asymmetric
//! with reading progress and ratings.

use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::library::{AddToLibrary, LibraryEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, novel_id, is_favorite, added_at";

/// Provides library membership operations.
pub struct LibraryRepo;

impl LibraryRepo {
    /// Insert a library entry, returning the created row.
    ///
    /// Duplicate `(user_id, novel_id)` pairs violate
    /// `uq_library_user_novel`; callers pre-check and surface a Conflict.
    pub async fn add(pool: &PgPool, input: &AddToLibrary) -> Result<LibraryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO library (user_id, novel_id, is_favorite)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LibraryEntry>(&query)
            .bind(input.user_id)
            .bind(input.novel_id)
            .bind(input.is_favorite)
            .fetch_one(pool)
            .await
    }

    /// Find a user's library entry for a novel.
    pub async fn find_by_user_and_novel(
        pool: &PgPool,
        user_id: DbId,
        novel_id: DbId,
    ) -> Result<Option<LibraryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM library WHERE user_id = $1 AND novel_id = $2");
        sqlx::query_as::<_, LibraryEntry>(&query)
            .bind(user_id)
            .bind(novel_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's library, most recently added first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<LibraryEntry>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM library WHERE user_id = $1 ORDER BY added_at DESC");
        sqlx::query_as::<_, LibraryEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
