use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::report::genre_label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Genre bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render one bar per genre, tallest first, coloured like the results table.
pub fn genre_chart(ui: &mut Ui, state: &AppState) {
    if state.genre_counts.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.weak("No genre data  (File → Open…)");
        });
        return;
    }

    Plot::new("genre_chart")
        .legend(Legend::default())
        .y_axis_label("Movies")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for (i, (genre, count)) in state.genre_counts.iter().enumerate() {
                let label = genre_label(genre);
                let color = state.genre_colors.color_for(genre);
                let bar = Bar::new(i as f64, *count as f64)
                    .name(label)
                    .fill(color)
                    .width(0.7);
                let chart = BarChart::new(vec![bar]).name(label).color(color);
                plot_ui.bar_chart(chart);
            }
        });
}
