use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader::SUPPORTED_EXTENSIONS;
use crate::state::{AppState, MAX_TOP_N};

// ---------------------------------------------------------------------------
// Left side panel – query buttons
// ---------------------------------------------------------------------------

/// Render the left query panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Queries");
    ui.separator();

    let button_width = ui.available_width();
    let query_button = |ui: &mut Ui, label: &str| {
        ui.add_sized([button_width, 24.0], egui::Button::new(label))
            .clicked()
    };

    if query_button(ui, "Get Movie Count") {
        state.show_movie_count();
    }
    if query_button(ui, "Get Genre Counts") {
        state.show_genre_counts();
    }
    if query_button(ui, "Get Average Rating") {
        state.show_average_rating();
    }

    ui.add_space(8.0);
    ui.horizontal(|ui: &mut Ui| {
        ui.label("N:");
        ui.add(egui::DragValue::new(&mut state.top_n).range(1..=MAX_TOP_N));
    });
    if query_button(ui, "Get Top N Movies") {
        state.show_top_movies();
    }

    ui.add_space(8.0);
    ui.label("Enter Genre:");
    let response = ui.add(
        egui::TextEdit::singleline(&mut state.genre_input)
            .hint_text("e.g. Drama")
            .desired_width(button_width),
    );
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if query_button(ui, "Get Movies by Genre") || submitted {
        state.show_movies_by_genre();
    }

    ui.add_space(8.0);
    ui.separator();
    if query_button(ui, "Clear Output") {
        state.clear_output();
    }
}

// ---------------------------------------------------------------------------
// Output log
// ---------------------------------------------------------------------------

/// Scrolling, read-only log of every query result.
pub fn output_log(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .id_salt("output_log")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui: &mut Ui| {
            if state.output.is_empty() {
                ui.weak("Load a CSV file and run a query.");
            } else {
                ui.label(RichText::new(&state.output).monospace());
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(table), Some(source)) = (state.analyzer.table(), &state.source) {
            let name = source
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            ui.label(format!(
                "{name}: {} movies, {} genres",
                table.len(),
                state.genre_counts.len()
            ));
        } else {
            ui.label("No dataset loaded");
        }
    });
}

// ---------------------------------------------------------------------------
// Status bar and error window
// ---------------------------------------------------------------------------

pub fn status_bar(ui: &mut Ui, state: &AppState) {
    let text = RichText::new(&state.status);
    if state.status.starts_with("Error") {
        ui.label(text.color(Color32::RED));
    } else {
        ui.label(text);
    }
}

pub fn error_window(ctx: &egui::Context, state: &mut AppState) {
    let Some(message) = state.error.clone() else {
        return;
    };
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label(message);
            ui.add_space(4.0);
            if ui.button("OK").clicked() {
                state.error = None;
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open movie data")
        .add_filter("Supported files", SUPPORTED_EXTENSIONS)
        .add_filter("CSV Files", &["csv"])
        .add_filter("TSV Files", &["tsv", "tab"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
