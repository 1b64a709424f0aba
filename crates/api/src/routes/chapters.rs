//! Route definitions for chapter lifecycle.
//!
//! ```text
//! POST   /chapters                  create_chapter
//! GET    /chapters/{id}             get_chapter
//! PUT    /chapters/{id}             update_chapter
//! GET    /chapters/{id}/comments    list_comments
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chapters, comments};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/chapters", post(chapters::create_chapter))
        .route(
            "/chapters/{id}",
            get(chapters::get_chapter).put(chapters::update_chapter),
        )
        .route("/chapters/{id}/comments", get(comments::list_comments))
}
