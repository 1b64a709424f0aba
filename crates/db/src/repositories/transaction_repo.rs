//! Repository for the `transactions` ledger table.
//!
//! Ledger entries are immutable and always created as `pending`.
//! Settlement (status transitions and balance application) belongs to a
//! separate reconciliation component and is deliberately absent here.

use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::{CreateTransaction, Transaction};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, type, amount, coin_amount, status, reference_id, \
                        novel_id, chapter_id, created_at, updated_at";

/// Provides ledger entry creation and listing.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new pending ledger entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions \
                (user_id, type, amount, coin_amount, status, reference_id, novel_id, chapter_id) \
             VALUES ($1, $2, $3, $4, 'pending', $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(input.user_id)
            .bind(input.kind)
            .bind(input.amount)
            .bind(input.coin_amount)
            .bind(&input.reference_id)
            .bind(input.novel_id)
            .bind(input.chapter_id)
            .fetch_one(pool)
            .await
    }

    /// List a user's ledger entries, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Transaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM transactions WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
