use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod product_reviews;
pub mod products;

/// Errors surfaced by the service layer to the route handlers.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist.
    #[error("entity not found")]
    NotFound,
    /// The request body failed a business rule.
    #[error("{0}")]
    Form(String),
    /// A storage failure that the handler cannot recover from.
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
