//! # Shared-Secret Authentication
//!
//! Mutating operations require the caller to present the configured
//! API key. The comparison is exact and constant-time.

use crate::error::{CatalogError, CatalogResult};

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Check a supplied credential against the shared secret
pub fn check_api_key(supplied: Option<&str>, secret: &str) -> CatalogResult<()> {
    let supplied = supplied
        .ok_or_else(|| CatalogError::Authentication("API key is required".to_string()))?;

    if !constant_time_compare(supplied, secret) {
        return Err(CatalogError::Authentication("Invalid API key".to_string()));
    }

    Ok(())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
