pub mod chapters;
pub mod dashboard;
pub mod genres;
pub mod health;
pub mod library;
pub mod novels;
pub mod notifications;
pub mod ratings;
pub mod social;
pub mod transactions;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                            list, create
/// /users/{id}                       get, update
/// /users/{id}/transactions          ledger entries (newest first)
/// /users/{id}/library               library entries
/// /users/{id}/reading-progress      progress rows (most recent first)
/// /users/{id}/notifications         notifications (newest first)
///
/// /genres                           list, create
///
/// /novels                           list, create
/// /novels/{id}                      get, update
/// /novels/{id}/chapters             chapters in reading order
/// /novels/{id}/ratings              ratings (newest first)
///
/// /chapters                         create
/// /chapters/{id}                    get, update
/// /chapters/{id}/comments           visible comments (oldest first)
///
/// /ratings                          submit (upsert)
/// /transactions                     record ledger entry
/// /library                          add novel to library
/// /reading-progress                 upsert progress
/// /follows                          create follow edge
/// /comments                         create comment / reply
/// /notifications                    create notification
///
/// /dashboard/stats                  point-in-time platform statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(genres::router())
        .merge(novels::router())
        .merge(chapters::router())
        .merge(ratings::router())
        .merge(transactions::router())
        .merge(library::router())
        .merge(social::router())
        .merge(notifications::router())
        .merge(dashboard::router())
}
