use std::path::{Path, PathBuf};

use crate::color::GenreColors;
use crate::data::analyzer::MovieAnalyzer;
use crate::data::model::Movie;
use crate::data::query::DEFAULT_TOP_N;
use crate::report;

/// Upper bound for the top-N selector.
pub const MAX_TOP_N: usize = 100;

const NO_FILE_LOADED: &str = "No file loaded!";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Query engine; holds the loaded table, if any.
    pub analyzer: MovieAnalyzer,

    /// File the current table was read from.
    pub source: Option<PathBuf>,

    /// `n` for the top-N query.
    pub top_n: usize,

    /// Genre typed into the filter box.
    pub genre_input: String,

    /// Accumulated text of every query run so far.
    pub output: String,

    /// One-line outcome of the last action, shown in the status bar.
    pub status: String,

    /// Message for the modal error window.
    pub error: Option<String>,

    /// Genre counts of the loaded table, for the chart.
    pub genre_counts: Vec<(String, usize)>,

    /// Colour per genre, shared by chart and results table.
    pub genre_colors: GenreColors,

    /// Heading and rows of the last top-N or genre query.
    pub results: Option<(String, Vec<Movie>)>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            analyzer: MovieAnalyzer::new(),
            source: None,
            top_n: DEFAULT_TOP_N,
            genre_input: String::new(),
            output: String::new(),
            status: "Welcome to Movie Analyzer".to_string(),
            error: None,
            genre_counts: Vec::new(),
            genre_colors: GenreColors::default(),
            results: None,
        }
    }
}

impl AppState {
    /// Load a new table, discarding the current one whatever the outcome.
    pub fn load_path(&mut self, path: &Path) {
        self.source = None;
        self.genre_counts.clear();
        self.genre_colors = GenreColors::default();
        self.results = None;

        match self.analyzer.load(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} movies with columns {:?} from {}",
                    table.len(),
                    table.column_names(),
                    path.display()
                );
                let cols = table.columns();
                if !cols.genre {
                    log::warn!("{} has no Genre column", path.display());
                }
                if !cols.rating {
                    log::warn!("{} has no Rating column", path.display());
                }

                self.genre_counts = table.counts_by_genre();
                self.genre_colors =
                    GenreColors::new(self.genre_counts.iter().map(|(g, _)| g.as_str()));
                self.source = Some(path.to_path_buf());
                self.output
                    .push_str(&format!("File Loaded: {}\n\n", path.display()));
                self.status = format!("File loaded successfully: {}", path.display());
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.output
                    .push_str(&format!("Failed to load {}: {e}\n\n", path.display()));
                self.status = format!("Error: {e}");
                self.error = Some(format!("Could not load {}:\n{e}", path.display()));
            }
        }
    }

    pub fn show_movie_count(&mut self) {
        if !self.require_table() {
            return;
        }
        let count = self.analyzer.count();
        log::debug!("movie count query: {count}");
        self.output.push_str(&report::movie_count(count));
        self.status = format!("Total number of movies: {count}");
    }

    pub fn show_genre_counts(&mut self) {
        if !self.require_table() {
            return;
        }
        log::debug!("genre counts query");
        let counts = self.analyzer.counts_by_genre();
        self.output.push_str(&report::genre_counts(&counts));
        self.status = "Genre counts displayed".to_string();
    }

    pub fn show_average_rating(&mut self) {
        if !self.require_table() {
            return;
        }
        log::debug!("average rating query");
        let averages = self.analyzer.average_rating_by_genre();
        self.output.push_str(&report::average_ratings(&averages));
        self.status = "Average ratings displayed".to_string();
    }

    pub fn show_top_movies(&mut self) {
        if !self.require_table() {
            return;
        }
        let n = self.top_n.clamp(1, MAX_TOP_N);
        log::debug!("top {n} query");
        let top = self.analyzer.top_n(n);
        self.output.push_str(&report::top_movies(n, &top));
        self.results = Some((
            format!("Top {n} Movies by Rating"),
            top.into_iter().cloned().collect(),
        ));
        self.status = "Top movies displayed".to_string();
    }

    pub fn show_movies_by_genre(&mut self) {
        if !self.require_table() {
            return;
        }
        let genre = self.genre_input.trim().to_string();
        if genre.is_empty() {
            self.error = Some("Please enter a genre!".to_string());
            return;
        }

        log::debug!("genre filter query: {genre:?}");
        let movies = self.analyzer.filter_by_genre(&genre);
        self.output
            .push_str(&report::movies_in_genre(&genre, &movies));
        self.status = if movies.is_empty() {
            format!("No movies found in '{genre}' genre")
        } else {
            format!("Movies in '{genre}' genre displayed")
        };
        self.results = Some((
            format!("Movies in '{genre}' Genre"),
            movies.into_iter().cloned().collect(),
        ));
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
        self.results = None;
        self.status = "Output cleared".to_string();
    }

    /// Raise the "no file" error unless a table is loaded.
    fn require_table(&mut self) -> bool {
        if self.analyzer.is_loaded() {
            return true;
        }
        self.error = Some(NO_FILE_LOADED.to_string());
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MOVIES: &str = "Title,Genre,Rating\nA,Drama,8.0\nB,Comedy,6.0\nC,Drama,9.0\n";

    fn loaded(dir: &TempDir) -> AppState {
        let path = dir.path().join("movies.csv");
        std::fs::write(&path, MOVIES).unwrap();
        let mut state = AppState::default();
        state.load_path(&path);
        state
    }

    #[test]
    fn test_queries_without_table_raise_error() {
        let mut state = AppState::default();
        state.show_movie_count();
        assert_eq!(state.error.as_deref(), Some(NO_FILE_LOADED));
        assert!(state.output.is_empty());
    }

    #[test]
    fn test_load_populates_chart_data() {
        let dir = TempDir::new().unwrap();
        let state = loaded(&dir);

        assert!(state.error.is_none());
        assert!(state.output.starts_with("File Loaded: "));
        assert!(state.status.starts_with("File loaded successfully"));
        assert_eq!(
            state.genre_counts,
            vec![("Drama".to_string(), 2), ("Comedy".to_string(), 1)]
        );
        assert_ne!(
            state.genre_colors.color_for("Drama"),
            state.genre_colors.color_for("Comedy")
        );
    }

    #[test]
    fn test_query_output_is_appended() {
        let dir = TempDir::new().unwrap();
        let mut state = loaded(&dir);
        state.output.clear();

        state.show_movie_count();
        state.show_genre_counts();
        assert_eq!(
            state.output,
            "Total Number of Movies: 3\nGenre Counts:\nDrama   2\nComedy  1\n"
        );
        assert_eq!(state.status, "Genre counts displayed");
    }

    #[test]
    fn test_top_movies_fill_results_table() {
        let dir = TempDir::new().unwrap();
        let mut state = loaded(&dir);
        state.top_n = 2;
        state.show_top_movies();

        let (heading, rows) = state.results.as_ref().unwrap();
        assert_eq!(heading, "Top 2 Movies by Rating");
        let titles: Vec<&str> = rows.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["C", "A"]);
    }

    #[test]
    fn test_genre_filter_input() {
        let dir = TempDir::new().unwrap();
        let mut state = loaded(&dir);

        state.genre_input = "   ".to_string();
        state.show_movies_by_genre();
        assert_eq!(state.error.as_deref(), Some("Please enter a genre!"));

        state.error = None;
        state.genre_input = " Drama ".to_string();
        state.show_movies_by_genre();
        assert!(state.error.is_none());
        assert_eq!(state.results.as_ref().unwrap().1.len(), 2);
        assert_eq!(state.status, "Movies in 'Drama' genre displayed");

        state.genre_input = "Western".to_string();
        state.show_movies_by_genre();
        assert!(state
            .output
            .ends_with("No movies found in the genre 'Western'.\n"));
        assert_eq!(state.status, "No movies found in 'Western' genre");
    }

    #[test]
    fn test_load_error_shows_cause() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ragged.csv");
        std::fs::write(&path, "Title,Genre\nA,Drama,extra\n").unwrap();

        let mut state = AppState::default();
        state.load_path(&path);
        assert!(state.status.contains("line 2"), "{}", state.status);
        assert!(state.error.as_deref().unwrap().contains("expected 2 fields, saw 3"));
    }

    #[test]
    fn test_failed_reload_discards_table() {
        let dir = TempDir::new().unwrap();
        let mut state = loaded(&dir);
        state.show_top_movies();

        state.load_path(&dir.path().join("missing.csv"));
        assert!(state.error.is_some());
        assert!(state.status.starts_with("Error: "));
        assert!(state.source.is_none());
        assert!(state.results.is_none());
        assert!(state.genre_counts.is_empty());
        assert_eq!(state.analyzer.count(), 0);
    }
}
