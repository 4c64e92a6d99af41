use thiserror::Error;

use crate::category::errors::CategoryError;
use crate::category::models::CategoryId;
use crate::domain::pagination::PageRequestError;
use crate::product::models::ProductId;

/// Error for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid product id: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductNameError {
    #[error("Product name must not be empty")]
    Empty,

    #[error("Product name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price must not be negative, got {0}")]
    Negative(String),

    #[error("Price has too many decimal places: maximum {max}, got {actual}")]
    TooManyDecimals { max: u32, actual: u32 },

    #[error("Price too large: must be below {max}, got {actual}")]
    TooLarge { max: String, actual: String },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Quantity must not be negative, got {0}")]
    Negative(i32),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("Description too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for product operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid product ID: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Invalid product name: {0}")]
    InvalidName(#[from] ProductNameError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    #[error("Invalid description: {0}")]
    InvalidDescription(#[from] DescriptionError),

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(#[from] PageRequestError),

    // Domain-level errors
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<CategoryError> for ProductError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(id) => ProductError::CategoryNotFound(id),
            CategoryError::DatabaseError(msg) => ProductError::DatabaseError(msg),
            other => ProductError::Unknown(other.to_string()),
        }
    }
}
