//! Chapter entity model and DTOs.

use inkstone_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Chapter publication status, stored as the `chapter_status` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "chapter_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    Draft,
    Published,
    Scheduled,
}

impl Default for ChapterStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl ChapterStatus {
    /// Whether this status counts as published for the `published_at` rule.
    pub fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

/// A row from the `chapters` table.
///
/// `word_count` is derived from `content`, never client-supplied.
/// `published_at` is non-null iff the chapter is in its current published
/// period.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chapter {
    pub id: DbId,
    pub novel_id: DbId,
    pub chapter_number: i32,
    pub title: String,
    pub content: String,
    pub word_count: i32,
    pub status: ChapterStatus,
    pub is_premium: bool,
    #[serde(with = "rust_decimal::serde::float")]
    pub coin_cost: Decimal,
    pub views: i32,
    pub likes: i32,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new chapter.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateChapter {
    pub novel_id: DbId,
    #[validate(range(min = 1))]
    pub chapter_number: i32,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub status: ChapterStatus,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub coin_cost: Decimal,
}

/// DTO for updating an existing chapter. Absent fields are left unchanged.
///
/// `word_count` and `published_at` are not accepted here: the former is
/// recomputed when `content` changes, the latter follows the publication
/// state machine when `status` changes.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateChapter {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ChapterStatus>,
    pub is_premium: Option<bool>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub coin_cost: Option<Decimal>,
}
