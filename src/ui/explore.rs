// src/ui/explore.rs
use eframe::egui;

use super::{radar, status_badge};
use crate::state::Workspace;

pub fn show_explore_view(ui: &mut egui::Ui, workspace: &mut Workspace) {
    ui.horizontal(|ui| {
        ui.heading("Entity Explorer");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut query = workspace.navigation().search_query().to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut query)
                    .desired_width(320.0)
                    .hint_text("🔍 Search Intelligence Database..."),
            );
            if response.changed() {
                workspace.set_search_query(query);
            }
        });
    });
    ui.label("Cross-referencing global product patterns and strategic gaps.");
    ui.add_space(12.0);

    let visible = workspace.visible_products();
    if visible.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No entities match this query");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("explore_list_scroll")
        .show(ui, |ui| {
            for product in visible {
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        radar::show_radar(ui, ("explore_radar", product.id.as_str()), &product.metrics, 140.0);

                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                status_badge(ui, product.status);
                                ui.label(egui::RichText::new(product.domain.to_uppercase()).small());
                            });
                            ui.heading(&product.name);
                            ui.label(&product.description);
                            ui.add_space(4.0);

                            ui.horizontal(|ui| {
                                let in_set = workspace.comparison().contains(&product.id);
                                let can_add = !in_set && !workspace.comparison().is_full();
                                let label = if in_set { "✔ In Comparison" } else { "➕ Compare" };
                                if ui.add_enabled(can_add, egui::Button::new(label)).clicked() {
                                    workspace.add_to_comparison(&product.id);
                                }
                                if ui.button("Analyze ➡").clicked() {
                                    workspace.open_product(&product.id);
                                }
                            });
                        });
                    });
                });
                ui.add_space(4.0);
            }
        });
}
