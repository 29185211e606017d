// src/state/navigation.rs
use std::sync::Arc;

use crate::config::Product;

// Screen/view tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Explore,
    Detail,
    Comparison,
    Submit,
}

/// Which view is showing, which product it is about, and the search
/// query carried from Home into Explore.
///
/// Transitions only replace state. Anything that should happen on entering
/// a view is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    screen: Screen,
    focused: Option<Arc<Product>>,
    search_query: String,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn focused(&self) -> Option<&Arc<Product>> {
        self.focused.as_ref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
    }

    pub fn go_explore(&mut self, query: Option<String>) {
        if let Some(query) = query {
            self.search_query = query;
        }
        self.screen = Screen::Explore;
    }

    /// Focus `product` and show its detail view. `None` leaves everything as is.
    pub fn go_detail(&mut self, product: Option<Arc<Product>>) -> bool {
        match product {
            Some(product) => {
                self.focused = Some(product);
                self.screen = Screen::Detail;
                true
            }
            None => false,
        }
    }

    pub fn go_comparison(&mut self) {
        self.screen = Screen::Comparison;
    }

    pub fn go_submit(&mut self) {
        self.screen = Screen::Submit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProductId, ProductMetrics, ProductStatus};

    fn product(id: &str) -> Arc<Product> {
        Arc::new(Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            status: ProductStatus::Existing,
            domain: String::new(),
            metrics: ProductMetrics::default(),
            comments: Vec::new(),
            analysis_tags: Vec::new(),
        })
    }

    #[test]
    fn starts_at_home_without_focus() {
        let nav = Navigation::new();
        assert_eq!(nav.screen(), Screen::Home);
        assert!(nav.focused().is_none());
        assert_eq!(nav.search_query(), "");
    }

    #[test]
    fn explore_carries_query_only_when_given() {
        let mut nav = Navigation::new();
        nav.go_explore(Some("flux".to_string()));
        assert_eq!(nav.search_query(), "flux");

        nav.go_home();
        nav.go_explore(None);
        assert_eq!(nav.screen(), Screen::Explore);
        assert_eq!(nav.search_query(), "flux");
    }

    #[test]
    fn detail_without_product_is_a_no_op() {
        let mut nav = Navigation::new();
        nav.go_explore(None);
        assert!(!nav.go_detail(None));
        assert_eq!(nav.screen(), Screen::Explore);
        assert!(nav.focused().is_none());
    }

    #[test]
    fn focus_survives_leaving_detail() {
        let mut nav = Navigation::new();
        assert!(nav.go_detail(Some(product("1"))));
        assert_eq!(nav.screen(), Screen::Detail);

        nav.go_comparison();
        assert_eq!(nav.screen(), Screen::Comparison);
        assert_eq!(nav.focused().map(|p| p.id.as_str()), Some("1"));

        nav.go_submit();
        assert_eq!(nav.screen(), Screen::Submit);
    }
}
