//! Coin ledger entry model and DTOs.

use inkstone_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Ledger entry kind, stored as the `transaction_type` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    CoinPurchase,
    ChapterUnlock,
    WriterPayout,
}

/// Settlement status, stored as the `transaction_status` Postgres enum.
///
/// Entries are always created as `Pending`; settlement (moving to
/// `Completed`/`Failed`/`Refunded` and applying balance effects) belongs
/// to a separate reconciliation component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transaction_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
}

/// An immutable row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub user_id: DbId,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub coin_amount: Decimal,
    pub status: TransactionStatus,
    pub reference_id: Option<String>,
    pub novel_id: Option<DbId>,
    pub chapter_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a new ledger entry.
///
/// `amount` and `coin_amount` must be strictly positive; the handler
/// rejects zero or negative values before any write.
#[derive(Debug, Deserialize)]
pub struct CreateTransaction {
    pub user_id: DbId,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub coin_amount: Decimal,
    pub reference_id: Option<String>,
    pub novel_id: Option<DbId>,
    pub chapter_id: Option<DbId>,
}
