//! # Product Types
//!
//! Product records held by the catalog.
//! The seed catalog is built in, or loaded from `config/products.toml`.

use crate::error::{CatalogError, CatalogResult};
use crate::validation::validate_product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier, assigned on insert
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    pub description: String,

    /// Price, never negative
    pub price: f64,

    /// Category name (matched case-insensitively by filters)
    pub category: String,

    /// Whether the product is currently available
    pub in_stock: bool,
}

impl Product {
    /// Build a product from an id and a validated field set
    pub fn from_input(id: impl Into<String>, input: ProductInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock,
        }
    }

    /// Overwrite every mutable field; the id stays put
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.category = input.category;
        self.in_stock = input.in_stock;
    }

    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// The mutable fields of a product, as produced by the validator
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl ProductInput {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        in_stock: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            in_stock,
        }
    }
}

/// Product catalog used to seed the store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCatalog {
    #[serde(default)]
    pub products: Vec<Product>,
}

impl ProductCatalog {
    /// The five built-in products the service starts with
    pub fn seed() -> Self {
        let seed = |id: &str, name: &str, description: &str, price: f64, category: &str, in_stock: bool| {
            Product::from_input(id, ProductInput::new(name, description, price, category, in_stock))
        };

        Self {
            products: vec![
                seed(
                    "1",
                    "Laptop Pro 15",
                    "High-performance laptop with 16GB RAM and 512GB SSD",
                    1200.0,
                    "Electronics",
                    true,
                ),
                seed(
                    "2",
                    "Smartphone X",
                    "Latest smartphone with OLED display and triple camera",
                    800.0,
                    "Electronics",
                    true,
                ),
                seed(
                    "3",
                    "Ergonomic Office Chair",
                    "Adjustable chair with lumbar support",
                    350.0,
                    "Furniture",
                    true,
                ),
                seed(
                    "4",
                    "Espresso Machine",
                    "Automatic espresso maker with milk frother",
                    150.0,
                    "Appliances",
                    false,
                ),
                seed(
                    "5",
                    "Wireless Mouse",
                    "Compact bluetooth mouse with long battery life",
                    50.0,
                    "Electronics",
                    true,
                ),
            ],
        }
    }

    /// Load catalog from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Check every product against the payload rules and reject blank or
    /// duplicate ids
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashSet::new();

        for (index, product) in self.products.iter().enumerate() {
            if product.id.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "Product #{} has an empty id",
                    index + 1
                )));
            }

            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "Duplicate product id: {}",
                    product.id
                )));
            }

            let payload = serde_json::to_value(product)
                .map_err(|e| CatalogError::Validation(format!("Product {}: {}", product.id, e)))?;
            validate_product(&payload).map_err(|e| {
                CatalogError::Validation(format!("Product {}: {}", product.id, e))
            })?;
        }

        Ok(())
    }
}
