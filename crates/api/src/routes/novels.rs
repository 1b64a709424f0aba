//! Route definitions for novels and their owned listings.
//!
//! ```text
//! GET    /novels                  list_novels
//! POST   /novels                  create_novel
//! GET    /novels/{id}             get_novel
//! PUT    /novels/{id}             update_novel
//! GET    /novels/{id}/chapters    list_chapters
//! GET    /novels/{id}/ratings     list_ratings
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{chapters, novels, ratings};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/novels", get(novels::list_novels).post(novels::create_novel))
        .route(
            "/novels/{id}",
            get(novels::get_novel).put(novels::update_novel),
        )
        .route("/novels/{id}/chapters", get(chapters::list_chapters))
        .route("/novels/{id}/ratings", get(ratings::list_ratings))
}
