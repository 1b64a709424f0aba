//! Novel aggregate model and DTOs.
//!
//! Carries the denormalized counters (`total_chapters`, `total_views`,
//! `total_likes`, `average_rating`) maintained by the chapter and rating
//! repositories.

use inkstone_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Novel lifecycle status, stored as the `novel_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "novel_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NovelStatus {
    Draft,
    Ongoing,
    Completed,
    Hiatus,
    Dropped,
}

impl Default for NovelStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// A row from the `novels` table.
///
/// `average_rating` is NULL until the first rating is submitted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Novel {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub author_id: DbId,
    pub status: NovelStatus,
    pub genre_id: DbId,
    pub total_chapters: i32,
    pub total_views: i32,
    pub total_likes: i32,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub average_rating: Option<Decimal>,
    pub is_featured: bool,
    pub is_premium: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new novel.
#[derive(Debug, Deserialize)]
pub struct CreateNovel {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub author_id: DbId,
    #[serde(default)]
    pub status: NovelStatus,
    pub genre_id: DbId,
    #[serde(default)]
    pub is_premium: bool,
}

/// DTO for updating an existing novel. Absent fields are left unchanged;
/// explicit `null` clears a nullable column.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNovel {
    pub title: Option<String>,
    #[serde(default, with = "serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    pub cover_image_url: Option<Option<String>>,
    pub status: Option<NovelStatus>,
    pub genre_id: Option<DbId>,
    pub is_featured: Option<bool>,
    pub is_premium: Option<bool>,
}
