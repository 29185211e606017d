//! Boundary to the external text-generation service.
//!
//! The core only sees the `InsightService` trait; transports live behind it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Product;

/// Error types for insight generation.
#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    /// No credentials or endpoint configured
    #[error("Insight service unavailable: {0}")]
    Unavailable(String),

    /// Service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Transport-level failure
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service answered with no usable text
    #[error("Empty response")]
    EmptyResponse,

    /// The task running the call died before answering
    #[error("Insight task aborted: {0}")]
    Aborted(String),
}

/// Structured market analysis for a free-text ideation query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeationResult {
    pub sub_directions: Vec<String>,
    pub related_products: Vec<String>,
    pub market_gaps: Vec<String>,
    pub suggested_paths: Vec<String>,
    pub insight_summary: String,
}

/// A possibly-failing, possibly-slow narrative generator.
#[async_trait]
pub trait InsightService: Send + Sync {
    /// Backend identifier (e.g. model name).
    fn id(&self) -> &str;

    /// Narrative insight about one product from the angle given by `context`.
    async fn single_insight(&self, product: &Product, context: &str) -> Result<String, InsightError>;

    /// One narrative comparing all `products` (two to four of them).
    async fn comparison_insight(&self, products: &[Arc<Product>]) -> Result<String, InsightError>;

    /// Structured exploration of an ideation query.
    async fn ideation(&self, query: &str) -> Result<IdeationResult, InsightError>;
}
