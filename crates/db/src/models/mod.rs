//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all-`Option` fields) for patches
//!
//! NUMERIC columns are held as [`rust_decimal::Decimal`] and serialized as
//! plain JSON numbers via `rust_decimal::serde::float`, so callers never
//! see string-encoded numerics. Nullable columns in update DTOs use
//! double-`Option` fields (`serde_with::rust::double_option`): an absent
//! field means "leave unchanged", an explicit `null` means "set to NULL".

pub mod chapter;
pub mod comment;
pub mod follow;
pub mod genre;
pub mod library;
pub mod notification;
pub mod novel;
pub mod rating;
pub mod reading_progress;
pub mod stats;
pub mod transaction;
pub mod user;
