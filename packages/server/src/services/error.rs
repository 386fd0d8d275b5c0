use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Failure of an inventory operation. No variant leaves partial state behind.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing required field or invalid enum value.
    #[error("{0}")]
    Validation(String),

    /// A unique field (email, employee ID) is already taken.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(DbErr),
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            // A concurrent writer won the race past our up-front uniqueness check.
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint caught on write: {detail}");
                ServiceError::Conflict("A record with the same unique value already exists".into())
            }
            _ => ServiceError::Store(err),
        }
    }
}
