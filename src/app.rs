// src/app.rs
use eframe::egui;
use std::time::Duration;

use crate::state::{Screen, Workspace};
use crate::ui::{self, FormState};

// Poll interval for insight completions while a request is in flight
const PENDING_REPAINT: Duration = Duration::from_millis(100);

pub struct NexusApp {
    workspace: Workspace,
    forms: FormState,
}

impl NexusApp {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            forms: FormState::default(),
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button(egui::RichText::new("NEXUS INTEL").strong()).clicked() {
                self.workspace.go_home();
            }

            ui.separator();

            let screen = self.workspace.screen();
            if ui.selectable_label(screen == Screen::Explore, "Intelligence Database").clicked() {
                self.workspace.go_explore(None);
            }
            if ui.selectable_label(screen == Screen::Submit, "Submission Lab").clicked() {
                self.workspace.go_submit();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!("model: {}", self.workspace.insights().service_id()));
            });
        });
    }
}

impl eframe::App for NexusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.workspace.pump_insights();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_header(ui);
        });

        if !self.workspace.comparison().is_empty() {
            egui::TopBottomPanel::bottom("comparison_tray").show(ctx, |ui| {
                ui::tray::show_comparison_tray(ui, &mut self.workspace);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.workspace.screen() {
                Screen::Home => {
                    ui::home::show_home_view(ui, &mut self.workspace, &mut self.forms);
                },
                Screen::Explore => {
                    ui::explore::show_explore_view(ui, &mut self.workspace);
                },
                Screen::Detail => {
                    ui::detail::show_detail_view(ui, &mut self.workspace);
                },
                Screen::Comparison => {
                    ui::comparison::show_comparison_view(ui, &mut self.workspace);
                },
                Screen::Submit => {
                    ui::submit::show_submit_view(ui, &mut self.workspace, &mut self.forms);
                },
            }
        });

        if self.workspace.insights().has_pending() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}
