//! Tally: small data utilities for everyday spreadsheets and folders.
//!
//! The centerpiece turns a delimited text file into a Markdown report with
//! row and column counts, per-column numeric statistics and a sample of the
//! leading rows. Alongside it live quick grade and sales calculators and a
//! file organizer that sorts a directory into extension-named folders.
//!
//! # Example
//!
//! ```no_run
//! use tally::ReportBuilder;
//!
//! let report = ReportBuilder::new().build("sales.csv").unwrap();
//!
//! println!("Rows: {}", report.row_count);
//! for summary in &report.summaries {
//!     println!("{}: mean {:.2}", summary.name, summary.mean);
//! }
//! println!("{}", report.to_markdown());
//! ```

pub mod calc;
pub mod error;
pub mod input;
pub mod organize;
pub mod report;
pub mod summary;

pub use calc::{GradeSummary, SalesSummary, Verdict};
pub use error::{Result, TallyError};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use organize::{OrganizeConfig, OrganizePlan, Organizer, Transfer, TransferMode};
pub use report::{Report, ReportBuilder, ReportConfig, make_report, write_report};
pub use summary::{ColumnSummary, parse_number};
