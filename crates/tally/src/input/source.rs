//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Delimiter used to split fields.
    pub delimiter: char,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns in the header.
    pub column_count: usize,
    /// When the file was read.
    pub analyzed_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been parsed.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        delimiter: u8,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format: format_name(delimiter).to_string(),
            delimiter: delimiter as char,
            row_count,
            column_count,
            analyzed_at: Utc::now(),
        }
    }
}

/// Name of the format implied by a delimiter.
pub fn format_name(delimiter: u8) -> &'static str {
    match delimiter {
        b'\t' => "tsv",
        b',' => "csv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

/// Parsed tabular data.
///
/// Rows are kept exactly as parsed: a ragged row holds fewer cells than the
/// header and the missing positions are absent rather than empty.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    /// Column headers (first parsed row).
    pub headers: Vec<String>,
    /// Data rows (row-major order).
    pub rows: Vec<Vec<String>>,
    /// The delimiter used.
    pub delimiter: u8,
}

impl DataTable {
    /// Create a new data table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>, delimiter: u8) -> Self {
        Self {
            headers,
            rows,
            delimiter,
        }
    }

    /// True when the file produced no rows at all, not even a header.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Values present at a column position, skipping rows too short to have one.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(index).map(|s| s.as_str()))
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }

    /// A row shaped to the header: extra cells dropped, missing cells empty.
    pub fn padded_row(&self, row: usize) -> Option<Vec<&str>> {
        let cells = self.rows.get(row)?;
        Some(
            (0..self.column_count())
                .map(|i| cells.get(i).map(|s| s.as_str()).unwrap_or(""))
                .collect(),
        )
    }
}
