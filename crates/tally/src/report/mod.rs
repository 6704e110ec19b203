//! Report building, Markdown rendering and output.

mod builder;
mod markdown;
mod persistence;

pub use builder::{Report, ReportBuilder, ReportConfig, SAMPLE_ROWS, make_report};
pub use markdown::{EMPTY_REPORT, escape_cell};
pub use persistence::write_report;
