use thiserror::Error;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    /// The connection pool has not been established yet (startup retry
    /// still in progress).
    #[error("Database unavailable")]
    Unavailable,

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

impl DomainError {
    /// Map a SeaORM error, turning unique-key violations into `Conflict`.
    pub fn from_db(err: sea_orm::DbErr) -> Self {
        let msg = err.to_string();
        if msg.contains("Duplicate entry") || msg.contains("UNIQUE") {
            DomainError::Conflict(msg)
        } else {
            DomainError::Database(err)
        }
    }
}
