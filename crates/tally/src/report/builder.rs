//! Report builder: file in, structured report out.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::input::{DataTable, Parser, ParserConfig, SNIFF_BYTES, SourceMetadata};
use crate::summary::{ColumnSummary, summarize_table};

/// Rows shown in the sample section by default.
pub const SAMPLE_ROWS: usize = 5;

/// Configuration for building a report.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Maximum number of data rows in the sample section.
    pub sample_rows: usize,
    /// Number of leading bytes sampled for delimiter detection.
    pub sniff_bytes: usize,
    /// Delimiter to use instead of detecting one.
    pub delimiter: Option<u8>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_rows: SAMPLE_ROWS,
            sniff_bytes: SNIFF_BYTES,
            delimiter: None,
        }
    }
}

impl ReportConfig {
    fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            delimiter: self.delimiter,
            sniff_bytes: self.sniff_bytes,
            ..ParserConfig::default()
        }
    }
}

/// Everything a rendered report is made of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Column names, in file order. Empty for an empty file.
    pub headers: Vec<String>,
    /// Number of data rows (excluding the header).
    pub row_count: usize,
    /// Summaries of the numeric columns, in header order.
    pub summaries: Vec<ColumnSummary>,
    /// Leading data rows, each shaped to the header length.
    pub sample: Vec<Vec<String>>,
    /// Upper bound on the sample size the report was built with.
    pub sample_limit: usize,
}

impl Report {
    /// Assemble a report from a parsed table.
    pub fn from_table(table: &DataTable, source: SourceMetadata, sample_rows: usize) -> Self {
        let sample: Vec<Vec<String>> = (0..table.row_count().min(sample_rows))
            .filter_map(|row| table.padded_row(row))
            .map(|cells| cells.into_iter().map(str::to_string).collect())
            .collect();

        Self {
            source,
            headers: table.headers.clone(),
            row_count: table.row_count(),
            summaries: summarize_table(table),
            sample,
            sample_limit: sample_rows,
        }
    }

    /// True when the source file held no rows at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of columns in the header.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Look up the summary for a column by name.
    pub fn summary(&self, name: &str) -> Option<&ColumnSummary> {
        self.summaries.iter().find(|s| s.name == name)
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds reports from delimited text files.
pub struct ReportBuilder {
    config: ReportConfig,
    parser: Parser,
}

impl ReportBuilder {
    /// Create a builder with default configuration.
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    /// Create a builder with custom configuration.
    pub fn with_config(config: ReportConfig) -> Self {
        let parser = Parser::with_config(config.parser_config());
        Self { config, parser }
    }

    /// Force a delimiter instead of detecting one.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = Some(delimiter);
        self.parser = Parser::with_config(self.config.parser_config());
        self
    }

    /// Read a file and build its report.
    ///
    /// Fails only when the file is missing or unreadable; cells that are not
    /// numbers and an undetectable delimiter are handled without error.
    pub fn build(&self, path: impl AsRef<Path>) -> Result<Report> {
        let (table, source) = self.parser.parse_file(path)?;
        let report = Report::from_table(&table, source, self.config.sample_rows);

        info!(
            file = %report.source.file,
            rows = report.row_count,
            columns = report.column_count(),
            numeric_columns = report.summaries.len(),
            "built report"
        );

        Ok(report)
    }

    /// Read a file and render its Markdown report.
    pub fn render(&self, path: impl AsRef<Path>) -> Result<String> {
        Ok(self.build(path)?.to_markdown())
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the Markdown report for a file with default settings.
///
/// ```no_run
/// let markdown = tally::make_report("data/sales.csv")?;
/// println!("{}", markdown);
/// # Ok::<(), tally::TallyError>(())
/// ```
pub fn make_report(path: impl AsRef<Path>) -> Result<String> {
    ReportBuilder::new().render(path)
}
