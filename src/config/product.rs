// src/config/product.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use std::fmt;

use super::ProductMetrics;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProductStatus {
    Existing,
    InProgress,
    #[default]
    Ideation,
}

impl ProductStatus {
    pub const ALL: [ProductStatus; 3] = [
        ProductStatus::Existing,
        ProductStatus::InProgress,
        ProductStatus::Ideation,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Existing => "Existing",
            ProductStatus::InProgress => "In Progress",
            ProductStatus::Ideation => "Ideation",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,
    pub user: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub upvotes: u32,
}

/// A catalogued product concept.
///
/// Products are never edited after creation; the catalog, the comparison set
/// and the navigation focus all share the same `Arc<Product>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub status: ProductStatus,
    pub domain: String,
    pub metrics: ProductMetrics,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub analysis_tags: Vec<String>,
}

impl Product {
    /// Case-insensitive substring match on name, description and domain.
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.description, &self.domain]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
