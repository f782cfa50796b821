mod app;
mod color;
mod data;
mod report;
mod state;
mod ui;

use std::path::PathBuf;

use app::MovieAnalyzerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset to open at startup.
    let initial_path = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Movie Analyzer",
        options,
        Box::new(|_cc| Ok(Box::new(MovieAnalyzerApp::new(initial_path)))),
    )
}
