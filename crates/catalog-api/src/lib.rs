//! # catalog-api
//!
//! HTTP API layer for the product catalog.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for listing, searching and editing products
//! - Request logging and shared-secret auth middleware
//! - Central mapping of catalog errors to JSON error responses
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Description |
//! |--------|------|------|-------------|
//! | GET | `/health` | no | Health check |
//! | GET | `/api/products` | no | List products (filter + paginate) |
//! | GET | `/api/products/search?q=` | no | Search products |
//! | GET | `/api/products/stats` | no | Catalog statistics |
//! | GET | `/api/products/{id}` | no | Get product |
//! | POST | `/api/products` | yes | Create product |
//! | PUT | `/api/products/{id}` | yes | Replace product |
//! | DELETE | `/api/products/{id}` | yes | Delete product |

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult, ErrorResponse};
pub use routes::create_router;
pub use state::{AppConfig, AppState};
