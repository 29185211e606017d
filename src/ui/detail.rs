// src/ui/detail.rs
use eframe::egui;

use super::{insight, radar, status_badge};
use crate::state::Workspace;

pub fn show_detail_view(ui: &mut egui::Ui, workspace: &mut Workspace) {
    if ui.button("⬅ Back to Explorer").clicked() {
        workspace.go_explore(None);
        return;
    }
    ui.add_space(8.0);

    let Some(product) = workspace.navigation().focused().cloned() else {
        ui.centered_and_justified(|ui| {
            ui.label("Select a product to view details");
        });
        return;
    };

    egui::Grid::new("detail_grid")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            // Left column - product info
            ui.vertical(|ui| {
                ui.set_width(320.0);
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    status_badge(ui, product.status);
                    ui.heading(&product.name);
                    ui.label(&product.description);
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.weak("Domain");
                        ui.strong(&product.domain);
                    });
                    ui.add_space(8.0);

                    let in_set = workspace.comparison().contains(&product.id);
                    let can_add = !in_set && !workspace.comparison().is_full();
                    if ui.add_enabled(can_add, egui::Button::new("➕ Add to Analysis Set")).clicked() {
                        workspace.add_to_comparison(&product.id);
                    }
                });

                ui.add_space(8.0);
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.strong("Strategy Tags");
                    ui.horizontal_wrapped(|ui| {
                        for tag in &product.analysis_tags {
                            ui.label(egui::RichText::new(tag).small().background_color(egui::Color32::from_gray(40)));
                        }
                    });
                });
            });

            // Right column - insight and radar
            ui.vertical(|ui| {
                let regenerate = insight::show_insight_panel(
                    ui,
                    "Neural Strategy Insight",
                    "No insight requested yet.",
                    workspace.current_insight(),
                );
                if regenerate {
                    workspace.regenerate_insight(None);
                }

                ui.add_space(12.0);
                ui.group(|ui| {
                    ui.strong("Performance Radar");
                    radar::show_radar(ui, ("detail_radar", product.id.as_str()), &product.metrics, 320.0);
                });
            });
            ui.end_row();
        });
}
