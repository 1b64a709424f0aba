//! Read-side aggregation for the platform dashboard.
//!
//! Every call recomputes from source tables; there is no cache, so
//! staleness is bounded only by query cost.

use inkstone_core::types::Timestamp;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::stats::DashboardStats;

/// Provides point-in-time dashboard statistics.
pub struct StatsRepo;

impl StatsRepo {
    /// Collect global and today's statistics. The `[today_start,
    /// today_end)` window is computed by the caller from the local wall
    /// clock at call time.
    pub async fn collect(
        pool: &PgPool,
        today_start: Timestamp,
        today_end: Timestamp,
    ) -> Result<DashboardStats, sqlx::Error> {
        let total_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        let total_novels: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM novels")
            .fetch_one(pool)
            .await?;
        let total_chapters: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM chapters")
            .fetch_one(pool)
            .await?;
        let total_transactions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(pool)
            .await?;

        let total_revenue: Decimal = sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE status = 'completed'",
        )
        .fetch_one(pool)
        .await?;

        let active_users_today: i64 = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT user_id) FROM transactions \
             WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(today_start)
        .bind(today_end)
        .fetch_one(pool)
        .await?;

        let new_users_today: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE created_at >= $1 AND created_at < $2",
        )
        .bind(today_start)
        .bind(today_end)
        .fetch_one(pool)
        .await?;

        // Keyed on creation time, not published_at.
        let chapters_published_today: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM chapters \
             WHERE status = 'published' AND created_at >= $1 AND created_at < $2",
        )
        .bind(today_start)
        .bind(today_end)
        .fetch_one(pool)
        .await?;

        Ok(DashboardStats {
            total_users,
            total_novels,
            total_chapters,
            total_transactions,
            total_revenue,
            active_users_today,
            new_users_today,
            chapters_published_today,
        })
    }
}
