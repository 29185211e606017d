// src/config/mod.rs
pub mod metrics;
pub mod product;

// Re-export commonly used types
pub use metrics::{ProductMetrics, MetricDimension};
pub use product::{Product, ProductId, ProductStatus, Comment};
