//! CSV/TSV parser with delimiter detection.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, SourceMetadata};
use crate::error::{Result, TallyError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Delimiter used when detection fails.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Number of leading bytes examined for delimiter detection.
pub const SNIFF_BYTES: usize = 4096;

/// Maximum number of lines sampled for delimiter detection.
const SNIFF_LINES: usize = 10;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Number of leading bytes sampled when auto-detecting.
    pub sniff_bytes: usize,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            sniff_bytes: SNIFF_BYTES,
            quote: b'"',
        }
    }
}

/// Parses delimited text files.
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a file and return the data table and metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TallyError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read(path).map_err(|e| TallyError::io(path, e))?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => sniff_delimiter(&contents, self.config.sniff_bytes),
        };

        let table = self.parse_bytes(&contents, delimiter)?;
        debug!(
            file = %path.display(),
            delimiter = %(delimiter as char).escape_default(),
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed file"
        );

        let source_metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            delimiter,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, source_metadata))
    }

    /// Parse raw bytes with a known delimiter.
    ///
    /// Invalid UTF-8 is replaced rather than rejected. The first record
    /// becomes the header; an input with no records yields an empty table.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let text = decode(bytes);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(text.as_bytes());

        let mut records = reader.records();

        let headers: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(|s| s.to_string()).collect(),
            None => return Ok(DataTable::new(Vec::new(), Vec::new(), delimiter)),
        };

        let mut rows = Vec::new();
        for result in records {
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode bytes permissively and drop a leading byte-order mark.
fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => Cow::Borrowed(s.strip_prefix('\u{feff}').unwrap_or(s)),
        Cow::Owned(s) => match s.strip_prefix('\u{feff}') {
            Some(rest) => Cow::Owned(rest.to_string()),
            None => Cow::Owned(s),
        },
    }
}

/// Pick a delimiter from the first `limit` bytes, falling back to comma.
pub fn sniff_delimiter(bytes: &[u8], limit: usize) -> u8 {
    let truncated = bytes.len() > limit;
    let prefix = decode(&bytes[..bytes.len().min(limit)]);

    // A prefix cut mid-line would skew the counts of its last line.
    let sample = if truncated {
        match prefix.rfind('\n') {
            Some(end) => &prefix[..end],
            None => &prefix[..],
        }
    } else {
        &prefix[..]
    };

    match detect_delimiter(sample) {
        Ok(delimiter) => delimiter,
        Err(e) => {
            debug!(error = %e, "delimiter detection failed, using comma");
            DEFAULT_DELIMITER
        }
    }
}

/// Detect the delimiter by analyzing the first few lines.
pub fn detect_delimiter(text: &str) -> Result<u8> {
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .take(SNIFF_LINES)
        .collect();

    if lines.is_empty() {
        return Err(TallyError::DelimiterNotDetected(
            "no lines to analyze".to_string(),
        ));
    }

    let mut best: Option<(u8, usize)> = None;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Consistency dominates raw frequency; tab wins ties since it rarely
        // occurs inside values.
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((delim, score));
        }
    }

    best.map(|(delim, _)| delim).ok_or_else(|| {
        TallyError::DelimiterNotDetected(format!(
            "none of {:?} found in the header line",
            DELIMITERS.iter().map(|&d| d as char).collect::<Vec<_>>()
        ))
    })
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

/// Parse a user-supplied delimiter such as `;`, `\t` or `tab`.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    let delimiter = match value {
        "\\t" | "tab" | "TAB" => b'\t',
        s if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
        _ => {
            return Err(TallyError::InvalidDelimiter(format!(
                "'{}' is not a single ASCII character",
                value
            )));
        }
    };

    if matches!(delimiter, b'"' | b'\n' | b'\r') {
        return Err(TallyError::InvalidDelimiter(format!(
            "'{}' cannot separate fields",
            (delimiter as char).escape_default()
        )));
    }

    Ok(delimiter)
}
