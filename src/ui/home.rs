// src/ui/home.rs
use eframe::egui;

use super::{FormState, ACCENT};
use crate::state::Workspace;

const FEATURED: usize = 3;

pub fn show_home_view(ui: &mut egui::Ui, workspace: &mut Workspace, forms: &mut FormState) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(egui::RichText::new("DESIGN THE").size(48.0).strong());
        ui.label(egui::RichText::new("NEXT ENTITY.").size(48.0).strong().color(ACCENT));
        ui.add_space(12.0);
        ui.label("Nexus Intelligence is a strategic sandbox for product architects.");
        ui.add_space(24.0);

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut forms.home_query)
                    .desired_width(480.0)
                    .hint_text("Query the lab: 'Disrupt the local logistics market'..."),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Explore ➡").clicked() || entered {
                workspace.go_explore(Some(forms.home_query.trim().to_string()));
            }
        });

        ui.add_space(32.0);
        ui.heading("Featured Entities");
        ui.add_space(8.0);
    });

    let featured: Vec<_> = workspace.catalog().seeded().iter().take(FEATURED).cloned().collect();
    ui.horizontal_wrapped(|ui| {
        for product in featured {
            ui.group(|ui| {
                ui.set_width(280.0);
                ui.vertical(|ui| {
                    ui.strong(&product.name);
                    ui.label(&product.description);
                    if ui.link("Analyze Entity ➡").clicked() {
                        workspace.go_explore(Some(product.name.clone()));
                    }
                });
            });
        }
    });
}
