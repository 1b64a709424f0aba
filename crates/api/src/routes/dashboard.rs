//! Route definitions for the platform dashboard.
//!
//! ```text
//! GET    /dashboard/stats    get_dashboard_stats
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard/stats", get(dashboard::get_dashboard_stats))
}
