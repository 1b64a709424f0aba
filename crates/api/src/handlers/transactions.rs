//! Handlers for the coin ledger.
//!
//! Entries are created `pending` and never settled here; applying
//! balance effects is a separate reconciliation concern.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rust_decimal::Decimal;

use inkstone_core::error::CoreError;
use inkstone_core::types::DbId;
use inkstone_db::models::transaction::CreateTransaction;
use inkstone_db::repositories::TransactionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

use super::ensure_user_exists;

/// POST /transactions -- record a new ledger entry.
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(input): Json<CreateTransaction>,
) -> AppResult<impl IntoResponse> {
    if input.amount <= Decimal::ZERO || input.coin_amount <= Decimal::ZERO {
        return Err(CoreError::Validation(
            "amount and coin_amount must be strictly positive".to_string(),
        )
        .into());
    }

    ensure_user_exists(&state.pool, input.user_id).await?;

    let created = TransactionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = created.id,
        user_id = created.user_id,
        kind = ?created.kind,
        "Transaction recorded"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /users/{id}/transactions -- list a user's ledger entries.
pub async fn list_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state.pool, user_id).await?;
    let transactions = TransactionRepo::list_by_user(&state.pool, user_id).await?;
    tracing::debug!(user_id, count = transactions.len(), "Listed transactions");
    Ok(Json(DataResponse { data: transactions }))
}
