//! Asynchronous insight requests with per-context loading state.
//!
//! Two contexts exist: the focused product and the comparison set. Every
//! request gets a fresh [`Ticket`]; a completion only lands if its ticket is
//! still the active one for its context, so a slow answer for a product the
//! user already navigated away from can never overwrite the current one.
//!
//! Calls run as tokio tasks and report back over an mpsc channel. The owner
//! drains the channel with [`InsightOrchestrator::pump`] (once per frame) or
//! waits on [`InsightOrchestrator::settle_next`].

use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use super::service::{InsightError, InsightService};
use crate::config::{Product, ProductId};

pub const DEFAULT_CONTEXT: &str =
    "Comprehensive overview of strengths and weaknesses based on market metrics.";
pub const REGENERATE_CONTEXT: &str = "Regenerate insight focusing on growth levers.";

pub const SINGLE_FALLBACK: &str = "Failed to generate AI analysis. Please check your API key.";
pub const COMPARISON_FALLBACK: &str =
    "Comparison generation failed. Please check your AI settings.";

pub const MIN_COMPARISON: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// What a request was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Product(ProductId),
    Comparison(Vec<ProductId>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    Product,
    Comparison,
}

impl InsightKind {
    pub fn fallback(&self) -> &'static str {
        match self {
            InsightKind::Product => SINGLE_FALLBACK,
            InsightKind::Comparison => COMPARISON_FALLBACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsightStatus {
    #[default]
    Idle,
    Pending,
    Ready,
    Failed,
}

/// Latest request for one context and how far it got.
#[derive(Debug, Clone, Default)]
pub struct InsightRequest {
    ticket: Option<Ticket>,
    subject: Option<Subject>,
    status: InsightStatus,
    text: String,
}

impl InsightRequest {
    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    pub fn status(&self) -> InsightStatus {
        self.status
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_pending(&self) -> bool {
        self.status == InsightStatus::Pending
    }

    pub fn is_about(&self, subject: &Subject) -> bool {
        self.subject.as_ref() == Some(subject)
    }

    fn begin(&mut self, ticket: Ticket, subject: Subject) {
        self.ticket = Some(ticket);
        self.subject = Some(subject);
        self.status = InsightStatus::Pending;
        self.text.clear();
    }
}

#[derive(Debug)]
pub struct InsightCompletion {
    pub kind: InsightKind,
    pub ticket: Ticket,
    pub subject: Subject,
    pub outcome: Result<String, InsightError>,
}

pub struct InsightOrchestrator {
    service: Arc<dyn InsightService>,
    runtime: Handle,
    sender: UnboundedSender<InsightCompletion>,
    receiver: UnboundedReceiver<InsightCompletion>,
    next_ticket: u64,
    product: InsightRequest,
    comparison: InsightRequest,
}

impl InsightOrchestrator {
    pub fn new(service: Arc<dyn InsightService>, runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            service,
            runtime,
            sender,
            receiver,
            next_ticket: 0,
            product: InsightRequest::default(),
            comparison: InsightRequest::default(),
        }
    }

    pub fn service_id(&self) -> &str {
        self.service.id()
    }

    pub fn product(&self) -> &InsightRequest {
        &self.product
    }

    pub fn comparison(&self) -> &InsightRequest {
        &self.comparison
    }

    pub fn get(&self, kind: InsightKind) -> &InsightRequest {
        match kind {
            InsightKind::Product => &self.product,
            InsightKind::Comparison => &self.comparison,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.product.is_pending() || self.comparison.is_pending()
    }

    /// Start a single-product request, superseding whatever was in flight.
    pub fn request_product(&mut self, product: Arc<Product>, context: impl Into<String>) -> Ticket {
        let ticket = self.issue_ticket();
        let subject = Subject::Product(product.id.clone());
        self.product.begin(ticket, subject.clone());
        debug!(ticket = ticket.0, product = %product.id, "Requesting product insight");

        let service = Arc::clone(&self.service);
        let context = context.into();
        self.dispatch(InsightKind::Product, ticket, subject, async move {
            service.single_insight(&product, &context).await
        });
        ticket
    }

    /// Start a comparison request for `products`.
    ///
    /// With fewer than two products nothing is sent and the comparison
    /// context goes back to idle.
    pub fn request_comparison(&mut self, products: &[Arc<Product>]) -> Option<Ticket> {
        if products.len() < MIN_COMPARISON {
            self.reset(InsightKind::Comparison);
            return None;
        }

        let ticket = self.issue_ticket();
        let ids: Vec<ProductId> = products.iter().map(|p| p.id.clone()).collect();
        let subject = Subject::Comparison(ids);
        self.comparison.begin(ticket, subject.clone());
        debug!(ticket = ticket.0, count = products.len(), "Requesting comparison insight");

        let service = Arc::clone(&self.service);
        let products = products.to_vec();
        self.dispatch(InsightKind::Comparison, ticket, subject, async move {
            service.comparison_insight(&products).await
        });
        Some(ticket)
    }

    /// Forget the context's request; a late completion for it is dropped.
    pub fn reset(&mut self, kind: InsightKind) {
        match kind {
            InsightKind::Product => self.product = InsightRequest::default(),
            InsightKind::Comparison => self.comparison = InsightRequest::default(),
        }
    }

    /// Apply a completion if it is still current. Returns whether it was applied.
    pub fn settle(&mut self, completion: InsightCompletion) -> bool {
        let slot = match completion.kind {
            InsightKind::Product => &mut self.product,
            InsightKind::Comparison => &mut self.comparison,
        };

        if slot.ticket != Some(completion.ticket) {
            debug!(
                ticket = completion.ticket.0,
                subject = ?completion.subject,
                "Discarding stale insight"
            );
            return false;
        }

        match completion.outcome {
            Ok(text) if !text.trim().is_empty() => {
                slot.status = InsightStatus::Ready;
                slot.text = text;
            }
            Ok(_) => {
                warn!(ticket = completion.ticket.0, "Insight service returned no text");
                slot.status = InsightStatus::Failed;
                slot.text = completion.kind.fallback().to_string();
            }
            Err(e) => {
                warn!(ticket = completion.ticket.0, error = %e, "Insight generation failed");
                slot.status = InsightStatus::Failed;
                slot.text = completion.kind.fallback().to_string();
            }
        }
        true
    }

    /// Settle every completion that has already arrived, without blocking.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.receiver.try_recv() {
            if self.settle(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next completion and settle it.
    pub async fn settle_next(&mut self) -> bool {
        match self.receiver.recv().await {
            Some(completion) => self.settle(completion),
            None => false,
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    fn dispatch<F>(&self, kind: InsightKind, ticket: Ticket, subject: Subject, call: F)
    where
        F: Future<Output = Result<String, InsightError>> + Send + 'static,
    {
        let sender = self.sender.clone();
        let call = self.runtime.spawn(call);
        self.runtime.spawn(async move {
            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(e) => Err(InsightError::Aborted(e.to_string())),
            };
            // Receiver is gone only when the orchestrator was dropped
            let _ = sender.send(InsightCompletion { kind, ticket, subject, outcome });
        });
    }
}
