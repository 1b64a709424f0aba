//! Dashboard statistics payload.

use rust_decimal::Decimal;
use serde::Serialize;

/// Point-in-time platform statistics, recomputed from source on each call.
///
/// The "today" figures are bounded by the local-midnight window supplied
/// by the caller at collection time.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_novels: i64,
    pub total_chapters: i64,
    pub total_transactions: i64,
    /// Sum of `amount` over completed transactions; zero when none exist.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// Distinct users who created at least one transaction today.
    pub active_users_today: i64,
    pub new_users_today: i64,
    /// Published chapters CREATED today (keyed on creation time).
    pub chapters_published_today: i64,
}
