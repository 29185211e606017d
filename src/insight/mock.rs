//! Scripted insight backend for tests and offline runs.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;

use super::service::{IdeationResult, InsightError, InsightService};
use crate::config::Product;

/// Answers every call with text derived from its input.
///
/// Single insights read `"{response}: {name} ({context})"`, comparisons
/// `"{response}: {name} vs {name} ..."`. With a gate attached, each call
/// waits for one permit before answering.
pub struct MockInsightService {
    model_id: String,
    available: AtomicBool,
    response: String,
    gate: Option<Arc<Semaphore>>,
    call_count: AtomicU32,
}

impl MockInsightService {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            available: AtomicBool::new(true),
            response: "Mock insight".to_string(),
            gate: None,
            call_count: AtomicU32::new(0),
        }
    }

    /// Set the response prefix. An empty prefix makes every call answer with
    /// blank text.
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn with_available(self, available: bool) -> Self {
        self.available.store(available, Ordering::SeqCst);
        self
    }

    pub fn with_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    async fn answer(&self, body: String) -> Result<String, InsightError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| InsightError::Unavailable(e.to_string()))?
                .forget();
        }

        if !self.available.load(Ordering::SeqCst) {
            return Err(InsightError::Unavailable("Mock backend disabled".to_string()));
        }
        if self.response.is_empty() {
            return Ok(String::new());
        }
        Ok(format!("{}: {}", self.response, body))
    }
}

impl Default for MockInsightService {
    fn default() -> Self {
        Self::new("mock-model")
    }
}

#[async_trait]
impl InsightService for MockInsightService {
    fn id(&self) -> &str {
        &self.model_id
    }

    async fn single_insight(&self, product: &Product, context: &str) -> Result<String, InsightError> {
        self.answer(format!("{} ({})", product.name, context)).await
    }

    async fn comparison_insight(&self, products: &[Arc<Product>]) -> Result<String, InsightError> {
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        self.answer(names.join(" vs ")).await
    }

    async fn ideation(&self, query: &str) -> Result<IdeationResult, InsightError> {
        let summary = self.answer(query.to_string()).await?;
        Ok(IdeationResult {
            sub_directions: vec![format!("{} for teams", query)],
            related_products: Vec::new(),
            market_gaps: Vec::new(),
            suggested_paths: Vec::new(),
            insight_summary: summary,
        })
    }
}
