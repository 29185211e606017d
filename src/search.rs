// src/search.rs
use std::sync::Arc;

use crate::config::Product;

/// Products whose name, description or domain contains `query`, ignoring
/// case. Input order is kept; an empty query keeps everything.
pub fn filter(catalog: &[Arc<Product>], query: &str) -> Vec<Arc<Product>> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|p| needle.is_empty() || p.matches_lowercase(&needle))
        .cloned()
        .collect()
}
