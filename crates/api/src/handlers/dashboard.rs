//! Handler for platform dashboard statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Local;

use inkstone_core::stats::today_window;
use inkstone_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /dashboard/stats -- recompute platform statistics from source.
///
/// The "today" window is anchored to local midnight at call time.
pub async fn get_dashboard_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let (today_start, today_end) = today_window(Local::now());
    let stats = StatsRepo::collect(&state.pool, today_start, today_end).await?;
    tracing::debug!(
        total_users = stats.total_users,
        total_novels = stats.total_novels,
        "Collected dashboard stats"
    );
    Ok(Json(DataResponse { data: stats }))
}
