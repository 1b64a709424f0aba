//! Route definitions for user accounts and their owned sub-resources.
//!
//! ```text
//! GET    /users                          list_users
//! POST   /users                          create_user
//! GET    /users/{id}                     get_user
//! PUT    /users/{id}                     update_user
//! GET    /users/{id}/transactions        list_transactions
//! GET    /users/{id}/library             list_library
//! GET    /users/{id}/reading-progress    list_reading_progress
//! GET    /users/{id}/notifications       list_notifications
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{library, notifications, reading_progress, transactions, users};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{id}", get(users::get_user).put(users::update_user))
        .route(
            "/users/{id}/transactions",
            get(transactions::list_transactions),
        )
        .route("/users/{id}/library", get(library::list_library))
        .route(
            "/users/{id}/reading-progress",
            get(reading_progress::list_reading_progress),
        )
        .route(
            "/users/{id}/notifications",
            get(notifications::list_notifications),
        )
}
