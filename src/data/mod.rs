/// Data layer: core types, loading, and queries.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → MovieTable (or LoadError)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ MovieTable │  Vec<Movie>, column presence
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  counts, averages, top-N, genre filter
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ MovieAnalyzer │  owns the one live table
///   └───────────────┘
/// ```

pub mod analyzer;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
