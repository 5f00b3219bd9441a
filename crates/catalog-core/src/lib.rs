//! # catalog-core
//!
//! Core types and operations for the product catalog service.
//!
//! This crate provides:
//! - `Product`, `ProductInput` and the seed `ProductCatalog`
//! - `ProductStore` trait and the `InMemoryProductStore` implementation
//! - `validate_product` for checking create/update payloads
//! - `check_api_key` for the shared-secret check on mutating operations
//! - `ListQuery`, `search` and `stats` for read queries
//! - `CatalogError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use catalog_core::{validate_product, InMemoryProductStore, ProductStore};
//!
//! let store = InMemoryProductStore::seeded();
//! let input = validate_product(&payload)?;
//! let product = store.insert(input).await?;
//! ```

pub mod auth;
pub mod error;
pub mod product;
pub mod query;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use auth::{check_api_key, API_KEY_HEADER};
pub use error::{CatalogError, CatalogResult};
pub use product::{Product, ProductCatalog, ProductInput};
pub use query::{search, stats, CatalogStats, ListQuery, Pagination, PriceRange, ProductPage};
pub use store::{InMemoryProductStore, ProductStore, SharedProductStore};
pub use validation::validate_product;
