//! Repository for the `users` table.

use inkstone_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, UpdateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, role, display_name, avatar_url, \
                        bio, coin_balance, is_active, email_verified, two_factor_enabled, \
                        created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// The password hash is supplied by the caller; new accounts start
    /// with a zero coin balance.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUser,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, role, display_name)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(password_hash)
            .bind(input.role)
            .bind(&input.display_name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY created_at DESC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Update a user. Absent fields are left unchanged; double-`Option`
    /// profile fields distinguish "leave alone" from "clear to NULL".
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                display_name = CASE WHEN $2 THEN $3 ELSE display_name END,
                avatar_url = CASE WHEN $4 THEN $5 ELSE avatar_url END,
                bio = CASE WHEN $6 THEN $7 ELSE bio END,
                role = COALESCE($8, role),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.display_name.is_some())
            .bind(input.display_name.clone().flatten())
            .bind(input.avatar_url.is_some())
            .bind(input.avatar_url.clone().flatten())
            .bind(input.bio.is_some())
            .bind(input.bio.clone().flatten())
            .bind(input.role)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }
}
