use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Header of the title column.
pub const TITLE_COLUMN: &str = "Title";
/// Header of the genre column.
pub const GENRE_COLUMN: &str = "Genre";
/// Header of the rating column.
pub const RATING_COLUMN: &str = "Rating";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value as read from the source file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Keep a raw text cell verbatim. Empty text is `Null`.
    pub fn text(s: &str) -> CellValue {
        if s.is_empty() {
            CellValue::Null
        } else {
            CellValue::String(s.to_string())
        }
    }

    /// Classify a raw text cell. Empty text is `Null`.
    pub fn guess(s: &str) -> CellValue {
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Interpret the value as a rating: any finite number, including numeric
    /// text with surrounding whitespace.
    pub fn as_rating(&self) -> Option<f64> {
        let value = match self {
            CellValue::String(s) => s.trim().parse::<f64>().ok(),
            other => other.as_f64(),
        }?;
        value.is_finite().then_some(value)
    }

    /// Text rendering used for `Title` and `Genre`; `Null` is the empty string.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// One source row before the well-known columns are pulled out.
pub type Record = BTreeMap<String, CellValue>;

// ---------------------------------------------------------------------------
// Movie – one row of the table
// ---------------------------------------------------------------------------

/// A single movie (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    /// Genre text; empty when the cell is empty or the column is absent.
    pub genre: String,
    /// `None` when the cell is missing or not numeric.
    pub rating: Option<f64>,
    /// Every other column of the row, ignored by queries.
    pub extra: BTreeMap<String, CellValue>,
}

impl Movie {
    fn from_record(mut record: Record) -> Self {
        let mut take_text = |col: &str| {
            record
                .remove(col)
                .map(|v| v.as_text())
                .unwrap_or_default()
        };
        let title = take_text(TITLE_COLUMN);
        let genre = take_text(GENRE_COLUMN);
        let rating = record.remove(RATING_COLUMN).and_then(|v| v.as_rating());

        Movie {
            title,
            genre,
            rating,
            extra: record,
        }
    }
}

// ---------------------------------------------------------------------------
// Columns – which well-known columns the source provided
// ---------------------------------------------------------------------------

/// Presence of the columns queries depend on, resolved once at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub title: bool,
    pub genre: bool,
    pub rating: bool,
}

impl Columns {
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let has = |name: &str| headers.iter().any(|h| h.as_ref() == name);
        Columns {
            title: has(TITLE_COLUMN),
            genre: has(GENRE_COLUMN),
            rating: has(RATING_COLUMN),
        }
    }
}

// ---------------------------------------------------------------------------
// MovieTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    movies: Vec<Movie>,
    column_names: Vec<String>,
    columns: Columns,
}

impl MovieTable {
    /// Build the table from source column names (in file order) and rows.
    pub fn from_records(column_names: Vec<String>, records: Vec<Record>) -> Self {
        let columns = Columns::from_headers(&column_names);
        let movies = records.into_iter().map(Movie::from_record).collect();
        MovieTable {
            movies,
            column_names,
            columns,
        }
    }

    /// All rows in source order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Every source column name in file order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn columns(&self) -> Columns {
        self.columns
    }

    /// Source columns other than `Title`, `Genre` and `Rating`, each name once.
    pub fn extra_columns(&self) -> impl Iterator<Item = &str> {
        let mut seen = BTreeSet::new();
        self.column_names
            .iter()
            .map(String::as_str)
            .filter(|c| ![TITLE_COLUMN, GENRE_COLUMN, RATING_COLUMN].contains(c))
            .filter(move |c| seen.insert(*c))
    }

    /// Number of movies.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[(&str, CellValue)]) -> Record {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_guess_cell_types() {
        assert_eq!(CellValue::guess(""), CellValue::Null);
        assert_eq!(CellValue::guess("42"), CellValue::Integer(42));
        assert_eq!(CellValue::guess("8.5"), CellValue::Float(8.5));
        assert_eq!(CellValue::guess("true"), CellValue::Bool(true));
        assert_eq!(
            CellValue::guess("Drama"),
            CellValue::String("Drama".to_string())
        );
    }

    #[test]
    fn test_text_cells_are_verbatim() {
        assert_eq!(CellValue::text(""), CellValue::Null);
        assert_eq!(CellValue::text("007").as_text(), "007");
        assert_eq!(CellValue::text("1e3").as_text(), "1e3");
    }

    #[test]
    fn test_duplicate_extra_columns_listed_once() {
        let names = ["Title", "Year", "Genre", "Year", "Title"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        let table = MovieTable::from_records(names, Vec::new());
        assert_eq!(table.extra_columns().collect::<Vec<_>>(), vec!["Year"]);
    }

    #[test]
    fn test_rating_interpretation() {
        assert_eq!(CellValue::Integer(7).as_rating(), Some(7.0));
        assert_eq!(CellValue::Float(6.5).as_rating(), Some(6.5));
        assert_eq!(CellValue::String(" 8.0 ".into()).as_rating(), Some(8.0));
        assert_eq!(CellValue::String("great".into()).as_rating(), None);
        assert_eq!(CellValue::Float(f64::NAN).as_rating(), None);
        assert_eq!(CellValue::Bool(true).as_rating(), None);
        assert_eq!(CellValue::Null.as_rating(), None);
    }

    #[test]
    fn test_columns_from_headers() {
        let cols = Columns::from_headers(&["Title", "Rating", "Year"]);
        assert!(cols.title);
        assert!(!cols.genre);
        assert!(cols.rating);

        // Header matching is case-sensitive.
        let cols = Columns::from_headers(&["title", "genre", "rating"]);
        assert_eq!(cols, Columns::default());
    }

    #[test]
    fn test_from_records_splits_known_columns() {
        let names = vec![
            "Title".to_string(),
            "Genre".to_string(),
            "Rating".to_string(),
            "Year".to_string(),
        ];
        let rows = vec![
            record(&[
                ("Title", CellValue::String("Heat".into())),
                ("Genre", CellValue::String("Crime".into())),
                ("Rating", CellValue::Float(8.3)),
                ("Year", CellValue::Integer(1995)),
            ]),
            record(&[
                ("Title", CellValue::Integer(1917)),
                ("Genre", CellValue::Null),
                ("Rating", CellValue::String("n/a".into())),
            ]),
        ];
        let table = MovieTable::from_records(names, rows);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.columns(),
            Columns {
                title: true,
                genre: true,
                rating: true
            }
        );
        assert_eq!(table.extra_columns().collect::<Vec<_>>(), vec!["Year"]);

        let heat = &table.movies()[0];
        assert_eq!(heat.title, "Heat");
        assert_eq!(heat.genre, "Crime");
        assert_eq!(heat.rating, Some(8.3));
        assert_eq!(heat.extra.get("Year"), Some(&CellValue::Integer(1995)));

        let war = &table.movies()[1];
        assert_eq!(war.title, "1917");
        assert_eq!(war.genre, "");
        assert_eq!(war.rating, None);
        assert!(war.extra.is_empty());
    }
}
