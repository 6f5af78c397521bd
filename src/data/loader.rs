use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{Row, StatDataset};

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

/// Structural problems with the input table itself.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("Expected top-level JSON array of records")]
    NotAnArray,
    #[error("Row {0} is not a JSON object")]
    RowNotObject(usize),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a stat table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`         – comma-delimited, header row with column names
/// * `.tsv` / `.tab` – tab-delimited, same layout
/// * `.json`        – records-oriented: `[{ "col": "value", ... }, ...]`
pub fn load_file(path: &Path) -> Result<StatDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_delimited(path, b','),
        "tsv" | "tab" => load_delimited(path, b'\t'),
        "json" => load_json(path),
        other => bail!(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Delimited loader
// ---------------------------------------------------------------------------

/// Header row names the columns; every following record becomes one [`Row`].
///
/// Records run flexible: a short record leaves its missing trailing columns
/// ABSENT from the row (no empty-string placeholder), and fields beyond the
/// header width have no column name and are dropped. A present-but-empty cell
/// is kept as an empty string.
fn load_delimited(path: &Path, delimiter: u8) -> Result<StatDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening table {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("reading row {row_no}"))?;

        let mut row = Row::new();
        for (col_idx, value) in record.iter().enumerate() {
            let Some(col_name) = headers.get(col_idx) else {
                break; // unnamed overflow fields
            };
            row.insert(col_name.clone(), value.to_string());
        }
        rows.push(row);
    }

    log::debug!("parsed {} delimited rows from {}", rows.len(), path.display());
    Ok(StatDataset::from_rows(rows))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "PLAYER": "A. Example", "AGE": 27, "PPG": 21.3 },
///   ...
/// ]
/// ```
///
/// Values are stringified to cell text. A JSON `null` leaves the key absent
/// from the row, matching the key-present-vs-absent check in the extractor.
fn load_json(path: &Path) -> Result<StatDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading JSON file {}", path.display()))?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().ok_or(LoadError::NotAnArray)?;

    let mut rows = Vec::with_capacity(records.len());

    for (i, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or(LoadError::RowNotObject(i))?;

        let mut row = Row::new();
        for (key, val) in obj {
            if let Some(cell) = json_to_cell(val) {
                row.insert(key.clone(), cell);
            }
        }
        rows.push(row);
    }

    Ok(StatDataset::from_rows(rows))
}

fn json_to_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}
