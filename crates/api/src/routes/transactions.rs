//! Route definitions for the coin ledger.
//!
//! ```text
//! POST   /transactions    create_transaction
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::transactions;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/transactions", post(transactions::create_transaction))
}
