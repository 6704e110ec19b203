//! Markdown rendering of reports.

use super::builder::Report;
use crate::summary::ColumnSummary;

/// Title used for every report.
const TITLE: &str = "# CSV Report";

/// Document produced for a file without any rows.
pub const EMPTY_REPORT: &str = "# CSV Report\n\nEmpty file.\n";

impl Report {
    /// Render the fixed-layout Markdown document.
    pub fn to_markdown(&self) -> String {
        if self.is_empty() {
            return EMPTY_REPORT.to_string();
        }

        let mut md = String::new();

        md.push_str(&format!("{}: {}\n\n", TITLE, self.source.file));
        md.push_str(&format!("- Data rows: **{}**\n", self.row_count));
        md.push_str(&format!(
            "- Columns: **{}** ({})\n\n",
            self.column_count(),
            self.headers.join(", ")
        ));

        if !self.summaries.is_empty() {
            md.push_str("## Numeric Summary per Column\n\n");
            md.push_str("| Column | Count | Min | Max | Mean | Sum |\n");
            md.push_str("|-------:|------:|----:|----:|-----:|----:|\n");
            for summary in &self.summaries {
                md.push_str(&summary_row(summary));
            }
            md.push('\n');
        }

        md.push_str(&format!("## Sample (up to {} rows)\n\n", self.sample_limit));
        md.push_str(&table_row(self.headers.iter().map(String::as_str)));
        md.push_str(&format!("|{}|\n", vec!["---"; self.column_count()].join("|")));
        for row in &self.sample {
            md.push_str(&table_row(row.iter().map(String::as_str)));
        }

        md
    }
}

fn summary_row(summary: &ColumnSummary) -> String {
    format!(
        "| {} | {} | {:.2} | {:.2} | {:.2} | {:.2} |\n",
        escape_cell(&summary.name),
        summary.count,
        summary.min,
        summary.max,
        summary.mean,
        summary.sum
    )
}

fn table_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<String> = cells.map(escape_cell).collect();
    format!("| {} |\n", cells.join(" | "))
}

/// Escape a value so it stays inside one Markdown table cell.
///
/// Backslashes are doubled first so a literal `\|` in the data cannot
/// cancel the escape on the following pipe.
pub fn escape_cell(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}
