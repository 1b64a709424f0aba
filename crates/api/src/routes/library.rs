//! Route definitions for library membership and reading progress.
//!
//! ```text
//! POST   /library             add_to_library (reject on duplicate)
//! PUT    /reading-progress    update_reading_progress (upsert)
//! ```

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::{library, reading_progress};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/library", post(library::add_to_library))
        .route(
            "/reading-progress",
            put(reading_progress::update_reading_progress),
        )
}
