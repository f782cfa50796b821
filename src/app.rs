use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MovieAnalyzerApp {
    pub state: AppState,
}

impl MovieAnalyzerApp {
    /// Start the app, optionally loading a dataset given on the command line.
    pub fn new(initial_path: Option<PathBuf>) -> Self {
        let mut app = Self::default();
        if let Some(path) = initial_path {
            app.state.load_path(&path);
        }
        app
    }
}

impl eframe::App for MovieAnalyzerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: status bar ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Left side panel: queries ----
        egui::SidePanel::left("query_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Right side panel: genre chart ----
        egui::SidePanel::right("chart_panel")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Genres");
                ui.separator();
                plot::genre_chart(ui, &self.state);
            });

        // ---- Central panel: output log above the results table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::TopBottomPanel::bottom("results_panel")
                .resizable(true)
                .default_height(220.0)
                .show_inside(ui, |ui| {
                    table::results_table(ui, &self.state);
                });
            panels::output_log(ui, &self.state);
        });

        panels::error_window(ctx, &mut self.state);
    }
}
