//! Route definitions for the social graph (follows + comments).
//!
//! ```text
//! POST   /follows     create_follow
//! POST   /comments    create_comment
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::{comments, follows};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/follows", post(follows::create_follow))
        .route("/comments", post(comments::create_comment))
}
