//! Route definitions for rating submission.
//!
//! ```text
//! POST   /ratings    submit_rating (upsert per (user, novel))
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::ratings;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/ratings", post(ratings::submit_rating))
}
