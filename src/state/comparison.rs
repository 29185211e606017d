// src/state/comparison.rs
use std::sync::Arc;

use crate::config::{Product, ProductId};

pub const MAX_COMPARISON: usize = 4;

/// Bounded, deduplicated working selection for side-by-side analysis.
///
/// Holds shared references into the catalog; removing an entry here never
/// affects the catalog.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSet {
    products: Vec<Arc<Product>>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `product` unless its id is already present or the set is full.
    pub fn add(&mut self, product: Arc<Product>) -> bool {
        if self.is_full() || self.contains(&product.id) {
            return false;
        }
        self.products.push(product);
        true
    }

    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        self.products.len() != before
    }

    pub fn clear(&mut self) {
        self.products.clear();
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.products.iter().any(|p| &p.id == id)
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.products.len() >= MAX_COMPARISON
    }
}
