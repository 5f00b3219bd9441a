//! # Read Queries
//!
//! Filtering, pagination, search and statistics over a product snapshot.
//! Everything here is a pure function of its inputs.

use crate::error::{CatalogError, CatalogResult};
use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_PAGE: usize = 1;
const DEFAULT_LIMIT: usize = 10;

/// Query-string parameters accepted by the list operation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category: Option<String>,
    pub in_stock: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Pagination metadata returned alongside a page of products
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// One page of filtered products
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub pagination: Pagination,
}

/// Lowest and highest price in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// Aggregate statistics over the catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub categories: BTreeMap<String, usize>,
    pub average_price: f64,
    pub price_range: PriceRange,
}

impl ListQuery {
    /// Apply category filter, then stock filter, then the pagination window
    pub fn apply(&self, products: Vec<Product>) -> CatalogResult<ProductPage> {
        let page = parse_positive(self.page.as_deref(), "page", DEFAULT_PAGE)?;
        let limit = parse_positive(self.limit.as_deref(), "limit", DEFAULT_LIMIT)?;
        let in_stock = self.in_stock.as_deref().map(parse_bool).transpose()?;
        let category = self.category.as_deref().map(str::to_lowercase);

        let filtered: Vec<Product> = products
            .into_iter()
            .filter(|p| {
                category
                    .as_deref()
                    .map_or(true, |c| p.category.to_lowercase() == c)
            })
            .filter(|p| in_stock.map_or(true, |s| p.in_stock == s))
            .collect();

        let total_items = filtered.len();
        let start = (page - 1).saturating_mul(limit);
        let end = page.saturating_mul(limit);

        let data: Vec<Product> = filtered.into_iter().skip(start).take(limit).collect();

        Ok(ProductPage {
            data,
            pagination: Pagination {
                current_page: page,
                total_pages: total_items.div_ceil(limit),
                total_items,
                items_per_page: limit,
                has_next_page: end < total_items,
                has_prev_page: start > 0,
            },
        })
    }
}

/// Case-insensitive substring search over name and description
pub fn search(products: Vec<Product>, query: Option<&str>) -> CatalogResult<Vec<Product>> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| {
            CatalogError::Validation("Search query parameter 'q' is required".to_string())
        })?
        .to_lowercase();

    Ok(products
        .into_iter()
        .filter(|p| p.matches_text(&needle))
        .collect())
}

/// Compute catalog statistics
pub fn stats(products: &[Product]) -> CatalogStats {
    let total_products = products.len();
    let in_stock = products.iter().filter(|p| p.in_stock).count();

    let mut categories = BTreeMap::new();
    for product in products {
        *categories.entry(product.category.clone()).or_insert(0) += 1;
    }

    let (average_price, price_range) = if products.is_empty() {
        (0.0, PriceRange { min: 0.0, max: 0.0 })
    } else {
        let sum: f64 = products.iter().map(|p| p.price).sum();
        let min = products.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
        let max = products
            .iter()
            .map(|p| p.price)
            .fold(f64::NEG_INFINITY, f64::max);
        (round_cents(sum / total_products as f64), PriceRange { min, max })
    };

    CatalogStats {
        total_products,
        in_stock,
        out_of_stock: total_products - in_stock,
        categories,
        average_price,
        price_range,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_positive(raw: Option<&str>, name: &str, default: usize) -> CatalogResult<usize> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                CatalogError::Validation(format!("'{}' must be a positive integer", name))
            }),
    }
}

/// Exact, case-sensitive match on the literal `true` / `false`
fn parse_bool(raw: &str) -> CatalogResult<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(CatalogError::Validation(
            "'inStock' must be 'true' or 'false'".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductCatalog;

    fn seed() -> Vec<Product> {
        ProductCatalog::seed().products
    }

    fn query(category: Option<&str>, in_stock: Option<&str>, page: Option<&str>, limit: Option<&str>) -> ListQuery {
        ListQuery {
            category: category.map(String::from),
            in_stock: in_stock.map(String::from),
            page: page.map(String::from),
            limit: limit.map(String::from),
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_defaults() {
        let page = ListQuery::default().apply(seed()).unwrap();
        assert_eq!(page.data.len(), 5);
        assert_eq!(
            page.pagination,
            Pagination {
                current_page: 1,
                total_pages: 1,
                total_items: 5,
                items_per_page: 10,
                has_next_page: false,
                has_prev_page: false,
            }
        );
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let page = query(Some("electronics"), None, None, None).apply(seed()).unwrap();
        assert_eq!(ids(&page.data), vec!["1", "2", "5"]);
        assert!(page.data.iter().all(|p| p.category == "Electronics"));
    }

    #[test]
    fn test_category_and_stock_narrow() {
        let page = query(Some("Appliances"), Some("true"), None, None).apply(seed()).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total_pages, 0);

        let page = query(None, Some("false"), None, None).apply(seed()).unwrap();
        assert_eq!(ids(&page.data), vec!["4"]);
    }

    #[test]
    fn test_pagination_window() {
        let page = query(None, None, Some("2"), Some("2")).apply(seed()).unwrap();
        assert_eq!(ids(&page.data), vec!["3", "4"]);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
        assert!(page.pagination.has_prev_page);

        let last = query(None, None, Some("3"), Some("2")).apply(seed()).unwrap();
        assert_eq!(ids(&last.data), vec!["5"]);
        assert!(!last.pagination.has_next_page);
    }

    #[test]
    fn test_page_past_the_end() {
        let page = query(None, None, Some("9"), Some("2")).apply(seed()).unwrap();
        assert!(page.data.is_empty());
        assert!(!page.pagination.has_next_page);
        assert!(page.pagination.has_prev_page);
    }

    #[test]
    fn test_invalid_parameters() {
        for q in [
            query(None, None, Some("0"), None),
            query(None, None, None, Some("abc")),
            query(None, Some("yes"), None, None),
        ] {
            assert!(matches!(q.apply(seed()), Err(CatalogError::Validation(_))));
        }
    }

    #[test]
    fn test_in_stock_is_case_sensitive() {
        for raw in ["TRUE", "False", " true"] {
            let result = query(None, Some(raw), None, None).apply(seed());
            assert!(matches!(result, Err(CatalogError::Validation(_))), "{raw}");
        }

        let page = query(None, Some("false"), None, None).apply(seed()).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "4");
    }

    #[test]
    fn test_search() {
        let found = search(seed(), Some("LAPTOP")).unwrap();
        assert_eq!(ids(&found), vec!["1"]);

        let found = search(seed(), Some("with")).unwrap();
        assert_eq!(ids(&found), vec!["1", "2", "3", "4", "5"]);

        assert!(search(seed(), Some("zeppelin")).unwrap().is_empty());
    }

    #[test]
    fn test_search_requires_query() {
        assert!(matches!(search(seed(), None), Err(CatalogError::Validation(_))));
        assert!(matches!(search(seed(), Some("  ")), Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_stats_on_seed() {
        let stats = stats(&seed());
        assert_eq!(stats.total_products, 5);
        assert_eq!(stats.in_stock, 4);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.average_price, 510.0);
        assert_eq!(stats.price_range, PriceRange { min: 50.0, max: 1200.0 });
        assert_eq!(stats.categories.get("Electronics"), Some(&3));
        assert_eq!(stats.categories.get("Furniture"), Some(&1));
        assert_eq!(stats.categories.get("Appliances"), Some(&1));
    }

    #[test]
    fn test_stats_empty() {
        let stats = stats(&[]);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.average_price, 0.0);
        assert_eq!(stats.price_range, PriceRange { min: 0.0, max: 0.0 });
        assert!(stats.categories.is_empty());
    }
}
