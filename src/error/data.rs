use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors surfaced by the data layer.
///
/// `NotFound` and `Conflict` are recoverable absence/duplicate signals the
/// caller can act on; `Database` is any other persistence failure, surfaced
/// without retry (retry policy belongs to the caller).
#[derive(Error, Debug)]
pub enum DataError {
    /// The referenced row does not exist.
    ///
    /// # Fields
    /// - Description of the missing resource
    #[error("{0} not found")]
    NotFound(String),

    /// A unique or foreign-key constraint rejected the write.
    ///
    /// Callers may react by regenerating a disambiguator (slug collisions)
    /// or rejecting the request, rather than treating this as fatal.
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A unit of work failed and the subsequent rollback failed too.
    ///
    /// Both causes are preserved so callers can observe the
    /// partial-failure state.
    #[error("transaction failed: {cause}; rollback also failed: {rollback}")]
    RollbackFailed {
        /// Error returned by the unit of work.
        cause: Box<DataError>,
        /// Error returned by the rollback attempt.
        #[source]
        rollback: DbErr,
    },

    /// Any other database failure (connection loss, I/O error).
    #[error(transparent)]
    Database(DbErr),
}

/// Classifies SeaORM errors at the data-layer boundary.
///
/// Constraint violations become `Conflict`; everything else stays a plain
/// `Database` failure.
impl From<DbErr> for DataError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => DataError::Conflict(message),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => DataError::Conflict(message),
            _ => DataError::Database(err),
        }
    }
}

impl DataError {
    /// True when the error is the absence signal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::NotFound(_))
    }

    /// True when the error is a constraint-violation conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, DataError::Conflict(_))
    }
}
