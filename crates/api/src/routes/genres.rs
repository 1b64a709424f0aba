//! Route definitions for the genre catalog.
//!
//! ```text
//! GET    /genres    list_genres
//! POST   /genres    create_genre
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/genres", get(genres::list_genres).post(genres::create_genre))
}
