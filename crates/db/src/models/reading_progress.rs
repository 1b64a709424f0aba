//! Reading progress model and DTOs.

use inkstone_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reading_progress` table. At most one per
/// `(user_id, novel_id)`; `last_read_at` refreshes on every upsert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadingProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub novel_id: DbId,
    pub chapter_id: DbId,
    #[serde(with = "rust_decimal::serde::float")]
    pub progress_percentage: Decimal,
    pub last_read_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting reading progress.
///
/// `progress_percentage` must lie in [0, 100]; out-of-range values are
/// rejected, never clamped.
#[derive(Debug, Deserialize)]
pub struct UpsertReadingProgress {
    pub user_id: DbId,
    pub novel_id: DbId,
    pub chapter_id: DbId,
    #[serde(with = "rust_decimal::serde::float")]
    pub progress_percentage: Decimal,
}
