// src/ui/mod.rs
use eframe::egui;

use crate::config::ProductStatus;
use crate::state::ProductDraft;

pub mod comparison;
pub mod detail;
pub mod explore;
pub mod home;
pub mod insight;
pub mod radar;
pub mod submit;
pub mod tray;

/// Text the user is typing that has not become a workspace action yet.
#[derive(Debug, Default)]
pub struct FormState {
    pub home_query: String,
    pub draft: ProductDraft,
}

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(99, 102, 241);

pub fn status_color(status: ProductStatus) -> egui::Color32 {
    match status {
        ProductStatus::Existing => egui::Color32::from_rgb(16, 185, 129),
        ProductStatus::InProgress | ProductStatus::Ideation => egui::Color32::from_rgb(245, 158, 11),
    }
}

pub fn status_badge(ui: &mut egui::Ui, status: ProductStatus) {
    ui.label(
        egui::RichText::new(status.label().to_uppercase())
            .small()
            .strong()
            .color(status_color(status)),
    );
}
