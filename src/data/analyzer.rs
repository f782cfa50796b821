use std::collections::BTreeMap;
use std::path::Path;

use super::error::LoadResult;
use super::loader::load_file;
use super::model::{Movie, MovieTable};

// ---------------------------------------------------------------------------
// MovieAnalyzer – owns at most one loaded table
// ---------------------------------------------------------------------------

/// Query engine over a single loaded [`MovieTable`].
///
/// Without a table every query answers with an empty result (or zero).
#[derive(Debug, Default)]
pub struct MovieAnalyzer {
    table: Option<MovieTable>,
}

impl MovieAnalyzer {
    /// An engine with no table loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-built table.
    pub fn from_table(table: MovieTable) -> Self {
        MovieAnalyzer { table: Some(table) }
    }

    /// Replace the current table with the contents of `path`.
    ///
    /// The previous table is dropped before reading, so a failed load leaves
    /// the engine empty.
    pub fn load(&mut self, path: &Path) -> LoadResult<&MovieTable> {
        self.table = None;
        let table = load_file(path)?;
        Ok(&*self.table.insert(table))
    }

    pub fn table(&self) -> Option<&MovieTable> {
        self.table.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// Number of rows in the loaded table.
    pub fn count(&self) -> usize {
        self.table.as_ref().map_or(0, MovieTable::len)
    }

    pub fn counts_by_genre(&self) -> Vec<(String, usize)> {
        self.table
            .as_ref()
            .map(MovieTable::counts_by_genre)
            .unwrap_or_default()
    }

    pub fn average_rating_by_genre(&self) -> BTreeMap<String, f64> {
        self.table
            .as_ref()
            .map(MovieTable::average_rating_by_genre)
            .unwrap_or_default()
    }

    pub fn top_n(&self, n: usize) -> Vec<&Movie> {
        self.table.as_ref().map(|t| t.top_n(n)).unwrap_or_default()
    }

    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.table
            .as_ref()
            .map(|t| t.filter_by_genre(genre))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::error::LoadError;
    use crate::data::query::tests::table;
    use tempfile::TempDir;

    #[test]
    fn test_empty_engine_answers_empty() {
        let analyzer = MovieAnalyzer::new();
        assert!(!analyzer.is_loaded());
        assert_eq!(analyzer.count(), 0);
        assert!(analyzer.counts_by_genre().is_empty());
        assert!(analyzer.average_rating_by_genre().is_empty());
        assert!(analyzer.top_n(5).is_empty());
        assert!(analyzer.filter_by_genre("Drama").is_empty());
    }

    #[test]
    fn test_load_counts_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("movies.csv");
        std::fs::write(&path, "Title,Genre,Rating\nA,Drama,8\nB,Comedy,6\n").unwrap();

        let mut analyzer = MovieAnalyzer::new();
        let loaded = analyzer.load(&path).unwrap().len();
        assert_eq!(loaded, 2);
        assert_eq!(analyzer.count(), 2);
    }

    #[test]
    fn test_failed_load_discards_previous_table() {
        let dir = TempDir::new().unwrap();
        let mut analyzer = MovieAnalyzer::from_table(table(&[("A", "Drama", Some(8.0))]));
        assert_eq!(analyzer.count(), 1);

        let err = analyzer.load(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
        assert!(analyzer.table().is_none());
        assert_eq!(analyzer.count(), 0);
    }

    #[test]
    fn test_queries_delegate_to_table() {
        let analyzer = MovieAnalyzer::from_table(table(&[
            ("A", "Drama", Some(8.0)),
            ("B", "Comedy", Some(6.0)),
            ("C", "Drama", Some(9.0)),
        ]));
        assert_eq!(analyzer.count(), 3);
        assert_eq!(analyzer.counts_by_genre()[0], ("Drama".to_string(), 2));
        assert_eq!(analyzer.average_rating_by_genre()["Comedy"], 6.0);
        assert_eq!(analyzer.top_n(1)[0].title, "C");
        assert_eq!(analyzer.filter_by_genre("Comedy").len(), 1);
    }
}
