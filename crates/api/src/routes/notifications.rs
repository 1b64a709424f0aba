//! Route definitions for notification creation.
//!
//! ```text
//! POST   /notifications    create_notification
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/notifications", post(notifications::create_notification))
}
