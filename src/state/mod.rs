// src/state/mod.rs
use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::{Product, ProductId};
use crate::insight::{InsightKind, InsightOrchestrator, InsightRequest, DEFAULT_CONTEXT, REGENERATE_CONTEXT};
use crate::search;

pub mod catalog;
pub mod comparison;
pub mod navigation;

pub use catalog::{Catalog, ProductDraft};
pub use comparison::{ComparisonSet, MAX_COMPARISON};
pub use navigation::{Navigation, Screen};

/// Read-only view of the workspace handed to the renderer.
#[derive(Debug, Clone)]
pub struct WorkspaceSnapshot {
    pub screen: Screen,
    pub focused: Option<Arc<Product>>,
    pub search_query: String,
    pub visible: Vec<Arc<Product>>,
    pub comparison: Vec<Arc<Product>>,
    pub insight: Option<InsightRequest>,
}

/// Everything one session owns: catalog, comparison set, navigation and the
/// insight requests tied to them.
///
/// Created at session start and passed to whatever renders it. All mutation
/// goes through the action methods below so that entering Detail or
/// Comparison, and changing what is compared, always issue the matching
/// insight request.
pub struct Workspace {
    catalog: Catalog,
    comparison: ComparisonSet,
    navigation: Navigation,
    insights: InsightOrchestrator,
    rng: Box<dyn RngCore + Send>,
}

impl Workspace {
    pub fn new(catalog: Catalog, insights: InsightOrchestrator, rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            catalog,
            comparison: ComparisonSet::new(),
            navigation: Navigation::new(),
            insights,
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn comparison(&self) -> &ComparisonSet {
        &self.comparison
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn insights(&self) -> &InsightOrchestrator {
        &self.insights
    }

    pub fn screen(&self) -> Screen {
        self.navigation.screen()
    }

    // Navigation

    pub fn go_home(&mut self) {
        self.navigation.go_home();
    }

    pub fn go_explore(&mut self, query: Option<String>) {
        self.navigation.go_explore(query);
    }

    pub fn go_submit(&mut self) {
        self.navigation.go_submit();
    }

    /// Show the detail view for `id` and request its insight.
    pub fn open_product(&mut self, id: &ProductId) -> bool {
        let product = self.catalog.get(id).cloned();
        if !self.navigation.go_detail(product) {
            debug!(id = %id, "Ignoring navigation to unknown product");
            return false;
        }
        if let Some(product) = self.navigation.focused().cloned() {
            info!(id = %product.id, name = %product.name, "Opened product detail");
            self.insights.request_product(product, DEFAULT_CONTEXT);
        }
        true
    }

    pub fn go_comparison(&mut self) {
        self.navigation.go_comparison();
        info!(count = self.comparison.len(), "Opened comparison");
        self.insights.request_comparison(self.comparison.products());
    }

    // Comparison set

    pub fn add_to_comparison(&mut self, id: &ProductId) -> bool {
        let added = match self.catalog.get(id) {
            Some(product) => self.comparison.add(Arc::clone(product)),
            None => false,
        };
        if added {
            self.comparison_changed();
        }
        added
    }

    pub fn remove_from_comparison(&mut self, id: &ProductId) -> bool {
        let removed = self.comparison.remove(id);
        if removed {
            self.comparison_changed();
        }
        removed
    }

    pub fn clear_comparison(&mut self) {
        if self.comparison.is_empty() {
            return;
        }
        self.comparison.clear();
        self.comparison_changed();
    }

    fn comparison_changed(&mut self) {
        if self.navigation.screen() == Screen::Comparison {
            self.insights.request_comparison(self.comparison.products());
        }
    }

    // Catalog

    /// Add a product from `draft` and show it in Explore.
    pub fn submit(&mut self, draft: ProductDraft) -> Option<Arc<Product>> {
        let product = self.catalog.submit(draft, &mut *self.rng)?;
        self.navigation.go_explore(None);
        Some(product)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.navigation.set_search_query(query);
    }

    pub fn visible_products(&self) -> Vec<Arc<Product>> {
        search::filter(self.catalog.list(), self.navigation.search_query())
    }

    // Insight

    /// Ask again for the insight on screen. `None` uses the growth-levers angle.
    pub fn regenerate_insight(&mut self, context: Option<&str>) -> bool {
        match self.navigation.screen() {
            Screen::Detail => match self.navigation.focused().cloned() {
                Some(product) => {
                    self.insights
                        .request_product(product, context.unwrap_or(REGENERATE_CONTEXT));
                    true
                }
                None => false,
            },
            Screen::Comparison => self
                .insights
                .request_comparison(self.comparison.products())
                .is_some(),
            _ => false,
        }
    }

    /// Insight belonging to the current view, if that view shows one.
    pub fn current_insight(&self) -> Option<&InsightRequest> {
        match self.navigation.screen() {
            Screen::Detail => Some(self.insights.get(InsightKind::Product)),
            Screen::Comparison => Some(self.insights.get(InsightKind::Comparison)),
            _ => None,
        }
    }

    pub fn pump_insights(&mut self) -> usize {
        self.insights.pump()
    }

    pub async fn settle_next(&mut self) -> bool {
        self.insights.settle_next().await
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            screen: self.navigation.screen(),
            focused: self.navigation.focused().cloned(),
            search_query: self.navigation.search_query().to_string(),
            visible: self.visible_products(),
            comparison: self.comparison.products().to_vec(),
            insight: self.current_insight().cloned(),
        }
    }
}
