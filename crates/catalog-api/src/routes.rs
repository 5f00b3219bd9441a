//! # Routes
//!
//! Axum router configuration for the product catalog API.

use crate::handlers;
use crate::middleware::{handle_panic, request_logging, require_api_key};
use crate::state::AppState;
use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - Public:
///   - GET /api/products - List, filter and paginate
///   - GET /api/products/search?q= - Search name and description
///   - GET /api/products/stats - Aggregate statistics
///   - GET /api/products/{id} - Get product by ID
///
/// - Require `x-api-key`:
///   - POST   /api/products - Create
///   - PUT    /api/products/{id} - Replace
///   - DELETE /api/products/{id} - Delete
///
/// - Health:
///   - GET /health, GET /
///
/// `search` and `stats` are static segments, so they take priority over
/// the `{id}` capture. The API key check wraps only the write handlers;
/// a known path hit with an unrouted method answers like an unknown route.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_key = middleware::from_fn_with_state(state.clone(), require_api_key);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .route("/api/products/search", get(handlers::search_products))
        .route("/api/products/stats", get(handlers::product_stats))
        .route(
            "/api/products",
            get(handlers::list_products)
                .merge(post(handlers::create_product).route_layer(api_key.clone())),
        )
        .route(
            "/api/products/{id}",
            get(handlers::get_product)
                .merge(put(handlers::update_product).route_layer(api_key.clone()))
                .merge(delete(handlers::delete_product).route_layer(api_key)),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::route_not_found)
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_logging))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
