use thiserror::Error;

use crate::repository::RepositoryError;

pub mod orders;
pub mod products;
pub mod users;

pub type ServiceResult<T> = Result<T, ServiceError>;

pub const CONSTRAINT_VIOLATED: &str = "Value is out of the allowed range";
pub const TOTAL_TOO_LARGE: &str = "Order total is too large";
pub const STOCK_LIMIT_EXCEEDED: &str = "Stock limit exceeded";

/// Outcome categories the HTTP layer maps onto status codes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist.
    #[error("{0}")]
    NotFound(String),
    /// The request broke a business or input rule.
    #[error("{0}")]
    Validation(String),
    /// Storage or runtime failure; the detail is for logs only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => ServiceError::NotFound("Record not found".to_string()),
            RepositoryError::ConstraintViolation(detail) => {
                log::warn!("Rejected write: {detail}");
                ServiceError::Validation(CONSTRAINT_VIOLATED.to_string())
            }
            RepositoryError::TotalOverflow => ServiceError::Validation(TOTAL_TOO_LARGE.to_string()),
            RepositoryError::StockOverflow => {
                ServiceError::Validation(STOCK_LIMIT_EXCEEDED.to_string())
            }
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
