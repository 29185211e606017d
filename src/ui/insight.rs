// src/ui/insight.rs
use eframe::egui;

use crate::insight::{InsightRequest, InsightStatus};

/// Draws one insight context. Returns true when Regenerate was clicked.
pub fn show_insight_panel(
    ui: &mut egui::Ui,
    title: &str,
    placeholder: &str,
    request: Option<&InsightRequest>,
) -> bool {
    let mut regenerate = false;

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.heading(format!("✨ {}", title));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let busy = request.map_or(false, |r| r.is_pending());
                if ui.add_enabled(!busy, egui::Button::new("Regenerate")).clicked() {
                    regenerate = true;
                }
            });
        });
        ui.add_space(8.0);

        match request.map(|r| (r.status(), r.text())) {
            Some((InsightStatus::Pending, _)) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Generating insight...");
                });
            }
            Some((InsightStatus::Ready, text)) => {
                ui.label(text);
            }
            Some((InsightStatus::Failed, text)) => {
                ui.colored_label(egui::Color32::from_rgb(244, 63, 94), text);
            }
            Some((InsightStatus::Idle, _)) | None => {
                ui.weak(placeholder);
            }
        }
    });

    regenerate
}
