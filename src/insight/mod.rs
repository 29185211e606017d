//! Narrative insight: the service boundary, its backends, and the
//! orchestrator that binds results to the subject on screen.

pub mod gemini;
pub mod mock;
pub mod orchestrator;
pub mod prompt;
pub mod service;

pub use gemini::GeminiService;
pub use mock::MockInsightService;
pub use orchestrator::{
    InsightCompletion, InsightKind, InsightOrchestrator, InsightRequest, InsightStatus, Subject,
    Ticket, COMPARISON_FALLBACK, DEFAULT_CONTEXT, REGENERATE_CONTEXT, SINGLE_FALLBACK,
};
pub use service::{IdeationResult, InsightError, InsightService};
