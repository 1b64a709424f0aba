use crate::types::DbId;

/// Domain error kinds used uniformly across the platform core.
///
/// Storage failures are NOT represented here; repositories surface
/// `sqlx::Error` directly and the API layer classifies it.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist. Checked before any write.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Input is structurally fine but out of the accepted range.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A uniqueness invariant would be violated.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The operation is well-formed but semantically disallowed.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
