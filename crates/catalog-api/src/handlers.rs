//! # Request Handlers
//!
//! Axum request handlers for the product catalog API.
//! Every handler returns `ApiResult`, so failures flow to the mapper in
//! `crate::error`.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use catalog_core::{
    query, validate_product, CatalogError, CatalogStats, ListQuery, Product, ProductPage,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Query string of the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub data: Vec<Product>,
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub product: Product,
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "product-catalog",
        "version": env!("CARGO_PKG_VERSION"),
        "products": state.store.len().await
    }))
}

/// List products with optional category/inStock filters and pagination
#[instrument(skip(state, params))]
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<ProductPage>> {
    let Query(params) = params?;
    let products = state.store.list().await?;
    Ok(Json(params.apply(products)?))
}

/// Search products by name or description
#[instrument(skip(state, params))]
pub async fn search_products(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(params) = params?;
    let products = state.store.list().await?;
    let data = query::search(products, params.q.as_deref())?;

    Ok(Json(SearchResponse {
        query: params.q.unwrap_or_default(),
        count: data.len(),
        data,
    }))
}

/// Aggregate catalog statistics
#[instrument(skip(state))]
pub async fn product_stats(State(state): State<AppState>) -> ApiResult<Json<CatalogStats>> {
    let products = state.store.list().await?;
    Ok(Json(query::stats(&products)))
}

/// Get single product
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Json<Product>> {
    Ok(Json(state.store.get(&product_id).await?))
}

/// Create a product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(payload) = payload?;
    let input = validate_product(&payload)?;
    let product = state.store.insert(input).await?;

    info!("Created product {} ({})", product.id, product.name);
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace every field of an existing product
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Json(payload) = payload?;
    let input = validate_product(&payload)?;
    let product = state.store.replace(&product_id, input).await?;

    info!("Updated product {}", product.id);
    Ok(Json(product))
}

/// Delete a product
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let product = state.store.remove(&product_id).await?;

    info!("Deleted product {}", product.id);
    Ok(Json(DeleteResponse {
        message: "Product deleted successfully".to_string(),
        product,
    }))
}

/// Fallback for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError(CatalogError::NotFound("Route not found".to_string()))
}
