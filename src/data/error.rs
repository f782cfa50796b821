use std::path::PathBuf;

use thiserror::Error;

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Why a dataset could not be turned into a [`MovieTable`](super::model::MovieTable).
///
/// Every variant leaves the caller without a table; there is no partial load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("reading parquet: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("decoding Arrow data: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("malformed table: {0}")]
    Malformed(String),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}
