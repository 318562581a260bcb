use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures surfaced by the storage layer.
///
/// Mirrors the `RepositoryError` shape of the `pushkind-common` crate
/// (not-found, constraint, database and pool variants) and adds the
/// stock-specific outcomes of order placement and cancellation.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    /// A conditional stock update matched no row.
    #[error("stock changed before the order could be applied")]
    StockConflict,
    /// Restoring stock would push it past the largest storable quantity.
    #[error("restored stock exceeds the storable maximum")]
    StockOverflow,
    /// Price times quantity does not fit in the order total.
    #[error("order total overflows")]
    TotalOverflow,
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("stored document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, info) => {
                RepositoryError::ConstraintViolation(info.message().to_string())
            }
            other => RepositoryError::Database(other),
        }
    }
}
