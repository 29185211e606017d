// src/main.rs
use anyhow::{Result, Context};
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_intel::app::NexusApp;
use nexus_intel::file::{CatalogFile, CatalogFileHandler, FileHandler};
use nexus_intel::insight::{GeminiService, InsightOrchestrator};
use nexus_intel::settings::Settings;
use nexus_intel::state::{Catalog, Workspace};

fn main() -> Result<()> {
    let settings = Settings::load()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog_file = match &settings.catalog.seed_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            CatalogFileHandler::new().load(path)?
        }
        None => CatalogFile::embedded()?,
    };
    info!("Catalog ready with {} products", catalog_file.products.len());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let service = GeminiService::from_settings(&settings.insight)?;
    if settings.insight.resolved_api_key().is_none() {
        warn!("No Gemini API key configured; insight requests will fail");
    }
    info!("Insight model: {}", settings.insight.model);

    let insights = InsightOrchestrator::new(Arc::new(service), runtime.handle().clone());
    let workspace = Workspace::new(
        Catalog::from_file(catalog_file),
        insights,
        Box::new(StdRng::from_entropy()),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Nexus Intel"),
        ..Default::default()
    };

    eframe::run_native(
        "Nexus Intel",
        options,
        Box::new(move |_cc| Box::new(NexusApp::new(workspace))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
