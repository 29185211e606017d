// src/ui/tray.rs
use eframe::egui;

use super::ACCENT;
use crate::state::{Workspace, MAX_COMPARISON};

/// Bottom bar listing the comparison set. Only drawn when it is non-empty.
pub fn show_comparison_tray(ui: &mut egui::Ui, workspace: &mut Workspace) {
    let products = workspace.comparison().products().to_vec();

    ui.horizontal(|ui| {
        ui.strong(format!("Analysis Set {}/{}", products.len(), MAX_COMPARISON));
        ui.separator();

        for product in &products {
            ui.label(egui::RichText::new(&product.name).color(ACCENT));
            if ui.small_button("✕").on_hover_text("Remove from comparison").clicked() {
                workspace.remove_from_comparison(&product.id);
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Compare Entities ➡").clicked() {
                workspace.go_comparison();
            }
            if ui.button("Clear").clicked() {
                workspace.clear_comparison();
            }
        });
    });
}
