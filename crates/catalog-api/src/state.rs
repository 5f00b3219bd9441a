//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the product store handle and the runtime configuration.

use anyhow::Context;
use catalog_core::{InMemoryProductStore, ProductCatalog, SharedProductStore};
use std::sync::Arc;

/// Fallback shared secret when `API_KEY` is unset
pub const DEFAULT_API_KEY: &str = "secret-api-key-12345";

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Shared secret required on mutating routes
    pub api_key: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables (and `.env`, if present)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("API_KEY").unwrap_or_else(|| {
            tracing::warn!("API_KEY not set, falling back to the built-in development key");
            DEFAULT_API_KEY.to_string()
        });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            api_key,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid socket address {}:{}", self.host, self.port))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if the shared secret is still the built-in default
    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            api_key: DEFAULT_API_KEY.to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Product storage backend
    pub store: SharedProductStore,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from the environment, seeding the in-memory store
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let catalog = load_product_catalog()?;

        let store = InMemoryProductStore::from_catalog(catalog)
            .context("Invalid product catalog")?;

        Ok(Self::with_store(Arc::new(store), config))
    }

    /// Build state around an existing store
    pub fn with_store(store: SharedProductStore, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Default config and the built-in seed products
    pub fn seeded() -> Self {
        Self::with_store(Arc::new(InMemoryProductStore::seeded()), AppConfig::default())
    }
}

/// Load the seed catalog from config file, or fall back to the built-in products
fn load_product_catalog() -> anyhow::Result<ProductCatalog> {
    let config_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = parse_product_catalog(&content, path)?;
            tracing::info!("Loaded {} products from {}", catalog.products.len(), path);
            return Ok(catalog);
        }
    }

    tracing::info!("No product catalog file found, using built-in seed products");
    Ok(ProductCatalog::seed())
}

/// Parse and check a catalog file; `path` is only used in error context
fn parse_product_catalog(content: &str, path: &str) -> anyhow::Result<ProductCatalog> {
    let catalog = ProductCatalog::from_toml(content)
        .with_context(|| format!("Failed to parse {}", path))?;
    catalog
        .validate()
        .with_context(|| format!("Invalid product catalog in {}", path))?;
    Ok(catalog)
}
