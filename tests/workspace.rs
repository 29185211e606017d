// tests/workspace.rs
use nexus_intel::file::CatalogFile;
use nexus_intel::insight::{
    InsightOrchestrator, InsightStatus, MockInsightService, COMPARISON_FALLBACK, REGENERATE_CONTEXT,
    SINGLE_FALLBACK,
};
use nexus_intel::state::{Catalog, ProductDraft, Screen, Workspace};
use nexus_intel::{ProductId, ProductStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Semaphore;

const SERENITY: &str = "1";
const FLUX: &str = "2";
const NEO: &str = "3";

fn workspace(service: MockInsightService) -> (Workspace, Arc<MockInsightService>) {
    let service = Arc::new(service);
    let insights = InsightOrchestrator::new(service.clone(), Handle::current());
    let catalog = Catalog::from_file(CatalogFile::embedded().unwrap());
    let workspace = Workspace::new(catalog, insights, Box::new(StdRng::seed_from_u64(11)));
    (workspace, service)
}

fn id(raw: &str) -> ProductId {
    ProductId::new(raw)
}

fn draft(name: &str, description: &str, domain: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        description: description.to_string(),
        domain: domain.to_string(),
        status: ProductStatus::Ideation,
    }
}

#[tokio::test]
async fn home_query_is_carried_into_explore() {
    let (mut ws, _) = workspace(MockInsightService::default());
    assert_eq!(ws.screen(), Screen::Home);

    ws.go_explore(Some("flux".to_string()));
    let snapshot = ws.snapshot();
    assert_eq!(snapshot.screen, Screen::Explore);
    assert_eq!(snapshot.search_query, "flux");
    let names: Vec<&str> = snapshot.visible.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["FluxFlow"]);

    ws.set_search_query("zzz");
    assert!(ws.visible_products().is_empty());
    ws.set_search_query("");
    assert_eq!(ws.visible_products().len(), 3);
}

#[tokio::test]
async fn opening_unknown_product_changes_nothing() {
    let (mut ws, service) = workspace(MockInsightService::default());
    ws.go_explore(None);

    assert!(!ws.open_product(&id("missing")));
    assert_eq!(ws.screen(), Screen::Explore);
    assert!(ws.navigation().focused().is_none());
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn opening_a_product_fetches_its_insight() {
    let (mut ws, _) = workspace(MockInsightService::new("m").with_response("Insight"));

    assert!(ws.open_product(&id(NEO)));
    assert_eq!(ws.screen(), Screen::Detail);
    assert_eq!(ws.current_insight().unwrap().status(), InsightStatus::Pending);

    assert!(ws.settle_next().await);
    let snapshot = ws.snapshot();
    assert_eq!(snapshot.focused.unwrap().name, "NeoLocal");
    let insight = snapshot.insight.unwrap();
    assert_eq!(insight.status(), InsightStatus::Ready);
    assert!(insight.text().contains("NeoLocal"));
}

#[tokio::test]
async fn switching_focus_discards_the_earlier_answer() {
    let gate = Arc::new(Semaphore::new(0));
    let (mut ws, _) = workspace(
        MockInsightService::new("m")
            .with_response("Insight")
            .with_gate(Arc::clone(&gate)),
    );

    ws.open_product(&id(SERENITY));
    ws.go_explore(None);
    ws.open_product(&id(FLUX));
    assert_eq!(ws.current_insight().unwrap().status(), InsightStatus::Pending);

    gate.add_permits(2);
    ws.settle_next().await;
    ws.settle_next().await;

    let insight = ws.current_insight().unwrap();
    assert_eq!(insight.status(), InsightStatus::Ready);
    assert!(insight.text().contains("FluxFlow"));
    assert!(!insight.text().contains("SerenityMind"));
}

#[tokio::test]
async fn failed_call_shows_fallback() {
    let (mut ws, _) = workspace(MockInsightService::new("m").with_available(false));

    ws.open_product(&id(SERENITY));
    ws.settle_next().await;
    let insight = ws.current_insight().unwrap();
    assert_eq!(insight.status(), InsightStatus::Failed);
    assert_eq!(insight.text(), SINGLE_FALLBACK);
    assert!(!ws.insights().has_pending());
}

#[tokio::test]
async fn regenerate_uses_growth_context_and_only_where_insight_is_shown() {
    let (mut ws, service) = workspace(MockInsightService::new("m").with_response("Insight"));

    assert!(!ws.regenerate_insight(None));
    assert_eq!(service.call_count(), 0);

    ws.open_product(&id(FLUX));
    ws.settle_next().await;
    assert!(ws.regenerate_insight(None));
    assert!(ws.current_insight().unwrap().is_pending());
    ws.settle_next().await;

    let text = ws.current_insight().unwrap().text().to_string();
    assert!(text.contains(REGENERATE_CONTEXT));

    assert!(ws.regenerate_insight(Some("pricing")));
    ws.settle_next().await;
    assert!(ws.current_insight().unwrap().text().contains("(pricing)"));
}

#[tokio::test]
async fn comparison_refetches_when_membership_changes_on_screen() {
    let (mut ws, service) = workspace(MockInsightService::new("m").with_response("Verdict"));

    assert!(ws.add_to_comparison(&id(SERENITY)));
    assert!(ws.add_to_comparison(&id(FLUX)));
    // Not on the comparison view yet, so nothing is requested
    assert_eq!(service.call_count(), 0);

    ws.go_comparison();
    ws.settle_next().await;
    assert_eq!(ws.current_insight().unwrap().status(), InsightStatus::Ready);
    assert!(ws.current_insight().unwrap().text().contains("SerenityMind vs FluxFlow"));

    assert!(ws.add_to_comparison(&id(NEO)));
    assert!(ws.current_insight().unwrap().is_pending());
    ws.settle_next().await;
    assert!(ws
        .current_insight()
        .unwrap()
        .text()
        .contains("SerenityMind vs FluxFlow vs NeoLocal"));

    assert!(ws.remove_from_comparison(&id(SERENITY)));
    assert!(ws.remove_from_comparison(&id(FLUX)));
    assert_eq!(ws.current_insight().unwrap().status(), InsightStatus::Idle);

    // The request for the two-product set is now stale
    ws.pump_insights();
    assert_eq!(ws.current_insight().unwrap().status(), InsightStatus::Idle);
}

#[tokio::test]
async fn comparison_failure_uses_its_own_fallback() {
    let (mut ws, _) = workspace(MockInsightService::new("m").with_available(false));

    ws.add_to_comparison(&id(SERENITY));
    ws.add_to_comparison(&id(NEO));
    ws.go_comparison();
    ws.settle_next().await;
    assert_eq!(ws.current_insight().unwrap().status(), InsightStatus::Failed);
    assert_eq!(ws.current_insight().unwrap().text(), COMPARISON_FALLBACK);
}

#[tokio::test]
async fn comparison_set_is_capped_and_deduplicated() {
    let (mut ws, _) = workspace(MockInsightService::default());
    let extra = ws.submit(draft("Extra", "Another concept", "Fintech")).unwrap();
    let fifth = ws.submit(draft("Fifth", "One too many", "Edtech")).unwrap();

    for raw in [SERENITY, FLUX, NEO] {
        assert!(ws.add_to_comparison(&id(raw)));
    }
    assert!(!ws.add_to_comparison(&id(FLUX)));
    assert!(ws.add_to_comparison(&extra.id));
    assert!(!ws.add_to_comparison(&fifth.id));
    assert!(!ws.add_to_comparison(&id("missing")));

    assert_eq!(ws.comparison().len(), 4);
    assert!(!ws.comparison().contains(&fifth.id));
    // Removing from the comparison never touches the catalog
    ws.clear_comparison();
    assert!(ws.comparison().is_empty());
    assert_eq!(ws.catalog().len(), 5);
}

#[tokio::test]
async fn submission_validates_and_lands_first_in_explore() {
    let (mut ws, _) = workspace(MockInsightService::default());
    ws.go_submit();

    assert!(ws.submit(draft("", "x", "d")).is_none());
    assert_eq!(ws.catalog().len(), 3);
    assert_eq!(ws.screen(), Screen::Submit);

    let product = ws.submit(draft("A", "B", "")).unwrap();
    assert_eq!(ws.screen(), Screen::Explore);
    assert_eq!(ws.catalog().list()[0].id, product.id);
    assert_eq!(product.domain, "Uncategorized");
    assert_eq!(product.analysis_tags, vec!["AI-Generated Analysis", "New Submission"]);
    for (_, score) in product.metrics.iter() {
        assert!((40..100).contains(&score));
    }
}
