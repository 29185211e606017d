// src/ui/comparison.rs
use eframe::egui;

use super::{insight, radar, status_badge};
use crate::config::MetricDimension;
use crate::state::Workspace;

pub fn show_comparison_view(ui: &mut egui::Ui, workspace: &mut Workspace) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Competitive Matrix");
            ui.label("Cross-referencing multi-dimensional product data points.");
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⬅ Back").clicked() {
                workspace.go_explore(None);
            }
        });
    });
    ui.add_space(12.0);

    let products = workspace.comparison().products().to_vec();
    if products.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("Add products from the explorer to compare them");
        });
        return;
    }

    egui::ScrollArea::horizontal()
        .id_source("comparison_matrix_scroll")
        .show(ui, |ui| {
            egui::Grid::new("comparison_matrix")
                .num_columns(products.len() + 1)
                .striped(true)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    ui.strong("DIMENSION");
                    for product in &products {
                        ui.vertical_centered(|ui| {
                            ui.strong(&product.name);
                            if ui.small_button("✕ Remove").clicked() {
                                workspace.remove_from_comparison(&product.id);
                            }
                        });
                    }
                    ui.end_row();

                    ui.strong("DNA MAPPING");
                    for product in &products {
                        radar::show_radar(ui, ("comparison_radar", product.id.as_str()), &product.metrics, 160.0);
                    }
                    ui.end_row();

                    for dimension in MetricDimension::ALL {
                        ui.label(dimension.label().to_uppercase());
                        for product in &products {
                            ui.label(product.metrics.get(dimension).to_string());
                        }
                        ui.end_row();
                    }

                    ui.strong("STATUS");
                    for product in &products {
                        status_badge(ui, product.status);
                    }
                    ui.end_row();

                    ui.strong("MARKET");
                    for product in &products {
                        ui.label(&product.domain);
                    }
                    ui.end_row();
                });
        });

    ui.add_space(16.0);
    let placeholder = if products.len() < 2 {
        "Add at least two products to generate a cross-product verdict."
    } else {
        "The AI is calculating differentiation paths based on shared market data..."
    };
    let regenerate = insight::show_insight_panel(
        ui,
        "Cross-Product Verdict",
        placeholder,
        workspace.current_insight(),
    );
    if regenerate {
        workspace.regenerate_insight(None);
    }
}
