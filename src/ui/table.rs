use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::report::{genre_label, rating_text};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Render the rows of the last top-N or genre query.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    let Some((heading, movies)) = &state.results else {
        ui.weak("Run \"Top N\" or \"Movies by Genre\" to list rows here.");
        return;
    };

    ui.strong(heading);
    if movies.is_empty() {
        ui.label("No rows.");
        return;
    }

    let extra: Vec<&str> = state
        .analyzer
        .table()
        .map(|t| t.extra_columns().collect())
        .unwrap_or_default();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto())
        .column(Column::auto())
        .columns(Column::auto(), extra.len())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for name in ["Title", "Genre", "Rating"].into_iter().chain(extra.iter().copied()) {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for movie in movies {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(&movie.title);
                    });
                    row.col(|ui| {
                        let color = state.genre_colors.color_for(&movie.genre);
                        ui.label(RichText::new(genre_label(&movie.genre)).color(color));
                    });
                    row.col(|ui| {
                        ui.label(rating_text(movie.rating));
                    });
                    for col in &extra {
                        row.col(|ui| {
                            let text = movie.extra.get(*col).map(|v| v.as_text());
                            ui.label(text.unwrap_or_default());
                        });
                    }
                });
            }
        });
}
