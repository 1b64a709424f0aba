//! User entity model and DTOs.

use inkstone_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Account role, stored as the `user_role` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Visitor,
    Reader,
    Writer,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Reader
    }
}

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub coin_balance: Decimal,
    pub is_active: bool,
    pub email_verified: bool,
    pub two_factor_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    pub coin_balance: Decimal,
    pub is_active: bool,
    pub email_verified: bool,
    pub two_factor_enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            display_name: user.display_name,
            avatar_url: user.avatar_url,
            bio: user.bio,
            coin_balance: user.coin_balance,
            is_active: user.is_active,
            email_verified: user.email_verified,
            two_factor_enabled: user.two_factor_enabled,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a new user.
///
/// The plain-text password is turned into a placeholder hash by the
/// handler; real password hashing lives outside this service.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    pub display_name: Option<String>,
}

/// DTO for updating an existing user. Absent fields are left unchanged;
/// explicit `null` clears a nullable column.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    #[serde(default, with = "serde_with::rust::double_option")]
    pub display_name: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    pub avatar_url: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    pub bio: Option<Option<String>>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}
