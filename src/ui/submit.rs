// src/ui/submit.rs
use eframe::egui;

use super::FormState;
use crate::config::ProductStatus;
use crate::state::{ProductDraft, Workspace};

pub fn show_submit_view(ui: &mut egui::Ui, workspace: &mut Workspace, forms: &mut FormState) {
    ui.vertical_centered(|ui| {
        ui.heading("➕ Submission Lab");
        ui.label(
            "Provide your product details. A strategic DNA profile is generated automatically.",
        );
    });
    ui.add_space(16.0);

    let draft = &mut forms.draft;
    let mut submitted = false;

    ui.group(|ui| {
        egui::Grid::new("submit_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Product Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.name)
                        .desired_width(400.0)
                        .hint_text("Enter name..."),
                );
                ui.end_row();

                ui.label("Domain / Category:");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.domain)
                        .desired_width(400.0)
                        .hint_text("e.g. Fintech, Edtech..."),
                );
                ui.end_row();

                ui.label("Status:");
                egui::ComboBox::from_id_source("submit_status")
                    .selected_text(draft.status.label())
                    .show_ui(ui, |ui| {
                        for status in ProductStatus::ALL {
                            ui.selectable_value(&mut draft.status, status, status.label());
                        }
                    });
                ui.end_row();

                ui.label("Description:");
                ui.add(
                    egui::TextEdit::multiline(&mut draft.description)
                        .desired_width(400.0)
                        .desired_rows(4)
                        .hint_text("Describe the core value proposition and target audience..."),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        let valid = draft.is_valid();
        if ui.add_enabled(valid, egui::Button::new("Generate Strategic Profile")).clicked() {
            submitted = true;
        }
        if !valid {
            ui.colored_label(egui::Color32::RED, "Name and description are required");
        }
    });

    if submitted && workspace.submit(forms.draft.clone()).is_some() {
        forms.draft = ProductDraft::default();
    }
}
