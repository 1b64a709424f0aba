//! HTTP handlers, grouped by domain.
//!
//! Handlers perform existence checks and domain-rule validation, then
//! delegate the write to the repository layer. Uniqueness pre-checks
//! give friendly Conflict messages; the `uq_*` database constraints are
//! the backstop under concurrent submissions.

pub mod chapters;
pub mod comments;
pub mod dashboard;
pub mod follows;
pub mod genres;
pub mod library;
pub mod notifications;
pub mod novels;
pub mod ratings;
pub mod reading_progress;
pub mod transactions;
pub mod users;

use inkstone_core::error::CoreError;
use inkstone_core::types::DbId;
use inkstone_db::models::chapter::Chapter;
use inkstone_db::models::genre::Genre;
use inkstone_db::models::novel::Novel;
use inkstone_db::models::user::User;
use inkstone_db::repositories::{ChapterRepo, GenreRepo, NovelRepo, UserRepo};
use sqlx::PgPool;

use crate::error::AppResult;

/// Verify that a user exists, returning the full row.
pub(crate) async fn ensure_user_exists(pool: &PgPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "User", id }.into())
}

/// Verify that a novel exists, returning the full row.
pub(crate) async fn ensure_novel_exists(pool: &PgPool, id: DbId) -> AppResult<Novel> {
    NovelRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Novel", id }.into())
}

/// Verify that a chapter exists, returning the full row.
pub(crate) async fn ensure_chapter_exists(pool: &PgPool, id: DbId) -> AppResult<Chapter> {
    ChapterRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Chapter", id }.into())
}

/// Verify that a genre exists, returning the full row.
pub(crate) async fn ensure_genre_exists(pool: &PgPool, id: DbId) -> AppResult<Genre> {
    GenreRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "Genre", id }.into())
}
