//! # Middleware
//!
//! Request logging, shared-secret authentication for mutating routes, and
//! the panic-to-500 conversion used by `CatchPanicLayer`.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use catalog_core::{check_api_key, CatalogError, API_KEY_HEADER};
use std::any::Any;
use std::time::Instant;
use tracing::{error, info, warn};

/// Log method, path and timestamp for every request, then status and latency
pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!(
        "[{}] {} {}",
        chrono::Utc::now().to_rfc3339(),
        method,
        path
    );

    let response = next.run(req).await;

    info!(
        "{} {} - {} - {}ms",
        method,
        path,
        response.status(),
        start.elapsed().as_millis()
    );

    response
}

/// Reject requests whose `x-api-key` header does not match the shared secret
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> ApiResult<Response> {
    let supplied = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if let Err(e) = check_api_key(supplied, &state.config.api_key) {
        warn!("Rejected {} {}: {}", req.method(), req.uri().path(), e);
        return Err(e.into());
    }

    Ok(next.run(req).await)
}

/// Turn a handler panic into the generic internal-error response
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Handler panicked: {}", detail);
    ApiError(CatalogError::Internal(detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_handle_panic_returns_500() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(String::from("boom")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
