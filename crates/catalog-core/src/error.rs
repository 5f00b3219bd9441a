//! # Catalog Error Types
//!
//! Typed error handling for the product catalog.
//! All catalog operations return `Result<T, CatalogError>`.

use thiserror::Error;

/// Core error type for all catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with the requested id, or no matching route
    #[error("{0}")]
    NotFound(String),

    /// Payload or query parameters failed a field rule
    #[error("{0}")]
    Validation(String),

    /// Missing or wrong shared secret
    #[error("{0}")]
    Authentication(String),

    /// Anything else. The message is for logs, never for clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Shorthand for a not-found error on a product id
    pub fn not_found(product_id: impl Into<String>) -> Self {
        CatalogError::NotFound(format!("Product not found: {}", product_id.into()))
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::NotFound(_) => 404,
            CatalogError::Validation(_) => 400,
            CatalogError::Authentication(_) => 401,
            CatalogError::Internal(_) => 500,
        }
    }

    /// Stable kind name used in error response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            CatalogError::NotFound(_) => "NotFound",
            CatalogError::Validation(_) => "ValidationError",
            CatalogError::Authentication(_) => "AuthenticationError",
            CatalogError::Internal(_) => "InternalServerError",
        }
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
