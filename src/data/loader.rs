use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::error::{LoadError, LoadResult};
use super::model::{CellValue, MovieTable, Record, GENRE_COLUMN, TITLE_COLUMN};

/// File extensions offered by the open dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "tsv", "tab", "txt", "json", "parquet", "pq"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a movie table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` / no extension – comma-delimited, header row first
/// * `.tsv` / `.tab` – tab-delimited, header row first
/// * `.json` – `[{ "Title": ..., "Genre": ..., "Rating": ... }, ...]`
/// * `.parquet` – any flat Parquet file; columns come from the schema
pub fn load_file(path: &Path) -> LoadResult<MovieTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "txt" | "" => load_delimited(path, b','),
        "tsv" | "tab" => load_delimited(path, b'\t'),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Delimited text loader
// ---------------------------------------------------------------------------

/// Header row with column names, one record per following line.
/// Short rows are padded with nulls; long rows are rejected.
fn load_delimited(path: &Path, delimiter: u8) -> LoadResult<MovieTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Err(LoadError::Malformed(format!(
            "{} has no header row",
            path.display()
        )));
    }

    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        if row.len() > headers.len() {
            let line = row.position().map_or(0, |p| p.line());
            return Err(LoadError::Malformed(format!(
                "line {line}: expected {} fields, saw {}",
                headers.len(),
                row.len()
            )));
        }

        let mut record = Record::new();
        for (col_idx, col_name) in headers.iter().enumerate() {
            // Duplicate headers keep their first value.
            if record.contains_key(col_name) {
                continue;
            }
            // Title and genre stay verbatim so "007" or "1e3" keep their spelling.
            let parse: fn(&str) -> CellValue = if col_name == TITLE_COLUMN || col_name == GENRE_COLUMN {
                CellValue::text
            } else {
                CellValue::guess
            };
            let value = row.get(col_idx).map_or(CellValue::Null, parse);
            record.insert(col_name.clone(), value);
        }
        records.push(record);
    }

    Ok(MovieTable::from_records(headers, records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Title": "Heat", "Genre": "Crime", "Rating": 8.3, "Year": 1995 },
///   ...
/// ]
/// ```
///
/// A column exists when at least one record carries the key.
fn load_json(path: &Path) -> LoadResult<MovieTable> {
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root
        .as_array()
        .ok_or_else(|| LoadError::Malformed("expected a top-level JSON array".into()))?;

    let mut column_names = Vec::new();
    let mut seen = BTreeSet::new();
    let mut records = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| LoadError::Malformed(format!("row {i} is not a JSON object")))?;

        let mut record = Record::new();
        for (key, val) in obj {
            if seen.insert(key.clone()) {
                column_names.push(key.clone());
            }
            record.insert(key.clone(), json_to_cell(val));
        }
        records.push(record);
    }

    Ok(MovieTable::from_records(column_names, records))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file holding one movie per row.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).  Nested columns are rendered as text.
fn load_parquet(path: &Path) -> LoadResult<MovieTable> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::io(path, e))?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let column_names: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        for row in 0..batch.num_rows() {
            let mut record = Record::new();
            for (col_idx, col_name) in column_names.iter().enumerate() {
                if record.contains_key(col_name) {
                    continue;
                }
                let value = extract_cell(batch.column(col_idx), row)?;
                record.insert(col_name.clone(), value);
            }
            records.push(record);
        }
    }

    Ok(MovieTable::from_records(column_names, records))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> LoadResult<CellValue> {
    if col.is_null(row) {
        return Ok(CellValue::Null);
    }
    let value = match col.data_type() {
        DataType::Utf8 => CellValue::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        _ => CellValue::String(array_value_to_string(col.as_ref(), row)?),
    };
    Ok(value)
}
