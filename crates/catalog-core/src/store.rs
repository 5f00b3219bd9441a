//! # Product Store
//!
//! Storage seam for the catalog. Handlers only see `ProductStore`, so a
//! persistent backend can replace the in-memory one without touching them.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          ProductStore (trait)           │
//! │  ├── list() / get()                     │
//! │  ├── insert() / replace()               │
//! │  └── remove()                           │
//! └─────────────────────────────────────────┘
//!                     ▲
//!          ┌──────────┴──────────┐
//!  ┌───────┴────────┐    ┌───────┴────────┐
//!  │ InMemoryProduct│    │  (persistent   │
//!  │     Store      │    │   backends)    │
//!  └────────────────┘    └────────────────┘
//! ```

use crate::error::{CatalogError, CatalogResult};
use crate::product::{Product, ProductCatalog, ProductInput};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Storage operations over the product collection.
///
/// Implementations keep insertion order and never hand out references to
/// their internal state: every returned product is an owned copy.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Snapshot of all products in insertion order
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Fetch a single product
    async fn get(&self, id: &str) -> CatalogResult<Product>;

    /// Assign a fresh id, append, and return the stored product
    async fn insert(&self, input: ProductInput) -> CatalogResult<Product>;

    /// Overwrite every mutable field of an existing product
    async fn replace(&self, id: &str, input: ProductInput) -> CatalogResult<Product>;

    /// Delete a product and return the removed record
    async fn remove(&self, id: &str) -> CatalogResult<Product>;

    /// Number of stored products
    async fn len(&self) -> usize;
}

/// Type alias for a shared store handle
pub type SharedProductStore = Arc<dyn ProductStore>;

/// Process-memory store; contents are lost on restart
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given catalog's products.
    /// Fails if any product breaks the field rules or reuses an id.
    pub fn from_catalog(catalog: ProductCatalog) -> CatalogResult<Self> {
        catalog.validate()?;
        Ok(Self {
            products: RwLock::new(catalog.products),
        })
    }

    /// Create a store holding the built-in seed products
    pub fn seeded() -> Self {
        Self {
            products: RwLock::new(ProductCatalog::seed().products),
        }
    }

    fn next_id(products: &[Product]) -> String {
        loop {
            let id = uuid::Uuid::new_v4().to_string();
            if !products.iter().any(|p| p.id == id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.read().clone())
    }

    async fn get(&self, id: &str) -> CatalogResult<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(id))
    }

    async fn insert(&self, input: ProductInput) -> CatalogResult<Product> {
        let mut products = self.products.write();
        let product = Product::from_input(Self::next_id(&products), input);
        products.push(product.clone());
        debug!(id = %product.id, "Inserted product");
        Ok(product)
    }

    async fn replace(&self, id: &str, input: ProductInput) -> CatalogResult<Product> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found(id))?;
        product.apply(input);
        debug!(id = %id, "Replaced product");
        Ok(product.clone())
    }

    async fn remove(&self, id: &str) -> CatalogResult<Product> {
        let mut products = self.products.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found(id))?;
        debug!(id = %id, "Removed product");
        Ok(products.remove(index))
    }

    async fn len(&self) -> usize {
        self.products.read().len()
    }
}
