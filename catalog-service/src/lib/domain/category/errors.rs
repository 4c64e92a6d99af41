use thiserror::Error;

use crate::category::models::CategoryId;
use crate::product::errors::ProductError;

/// Error for CategoryId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryIdError {
    #[error("Invalid category id: {0}")]
    InvalidFormat(String),
}

/// Error for CategoryName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CategoryNameError {
    #[error("Category name must not be empty")]
    Empty,

    #[error("Category name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for category operations
#[derive(Debug, Clone, Error)]
pub enum CategoryError {
    #[error("Invalid category ID: {0}")]
    InvalidCategoryId(#[from] CategoryIdError),

    #[error("Invalid category name: {0}")]
    InvalidName(#[from] CategoryNameError),

    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    #[error("Category name already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Category {0} is still referenced by products")]
    InUse(CategoryId),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<ProductError> for CategoryError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::DatabaseError(msg) => CategoryError::DatabaseError(msg),
            other => CategoryError::Unknown(other.to_string()),
        }
    }
}
