/// Core error types for Chord
use thiserror::Error;

/// Result type alias using `ChordError`
pub type Result<T> = std::result::Result<T, ChordError>;

/// Core error type for Chord
///
/// The first three variants form the taxonomy the service layer promises to
/// callers: `NotFound` is always propagated verbatim, `Forbidden` always
/// carries the owner-denial reason, and `InvariantViolation` marks a write
/// that should have affected at least one row but affected none (or a
/// duplicate like/collaboration).
#[derive(Error, Debug)]
pub enum ChordError {
    /// Referenced entity absent
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Principal lacks rights on the resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A write affected zero rows, or a uniqueness invariant was violated
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ChordError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create an invariant violation error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// True for `NotFound` (the resolver needs to tell this apart from a denial)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for ChordError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
