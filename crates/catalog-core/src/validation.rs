//! # Payload Validation
//!
//! Checks a candidate product payload field by field and stops at the
//! first failing rule. Rules run in a fixed order: name, description,
//! price, category, inStock.

use crate::error::{CatalogError, CatalogResult};
use crate::product::ProductInput;
use serde_json::{Map, Value};

/// Validate a raw JSON payload and extract the product fields
pub fn validate_product(payload: &Value) -> CatalogResult<ProductInput> {
    let obj = payload
        .as_object()
        .ok_or_else(|| invalid("Request body must be a JSON object"))?;

    let name = non_empty_string(obj, "name")
        .ok_or_else(|| invalid("Name is required and must be a non-empty string"))?;

    let description = non_empty_string(obj, "description")
        .ok_or_else(|| invalid("Description is required and must be a non-empty string"))?;

    let price = obj
        .get("price")
        .and_then(Value::as_f64)
        .filter(|p| *p >= 0.0)
        .ok_or_else(|| invalid("Price is required and must be a non-negative number"))?;

    let category = non_empty_string(obj, "category")
        .ok_or_else(|| invalid("Category is required and must be a non-empty string"))?;

    let in_stock = obj
        .get("inStock")
        .and_then(Value::as_bool)
        .ok_or_else(|| invalid("inStock is required and must be a boolean"))?;

    Ok(ProductInput {
        name,
        description,
        price,
        category,
        in_stock,
    })
}

fn non_empty_string(obj: &Map<String, Value>, field: &str) -> Option<String> {
    obj.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

fn invalid(message: &str) -> CatalogError {
    CatalogError::Validation(message.to_string())
}
