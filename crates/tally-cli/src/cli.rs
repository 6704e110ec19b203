//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally: CSV reports, grade and sales statistics, file organizing
#[derive(Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Markdown report from a CSV/TSV file
    Report {
        /// Path to the data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the report here instead of printing it
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Field delimiter (default: auto-detect), e.g. ";" or "\t"
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Output the report as JSON instead of Markdown
        #[arg(long)]
        json: bool,
    },

    /// Mean, median, min and max of a list of grades
    Grades {
        /// Grades, e.g. 7.5 8 6,2 9
        #[arg(value_name = "GRADE", required = true, num_args = 1.., value_parser = parse_value)]
        values: Vec<f64>,

        /// Minimum mean for approval
        #[arg(long, default_value_t = tally::calc::DEFAULT_PASSING_MARK)]
        passing_mark: f64,
    },

    /// Total revenue and average ticket of a list of sales
    Sales {
        /// Sale amounts, e.g. 120.90 45 32,5
        #[arg(value_name = "AMOUNT", required = true, num_args = 1.., value_parser = parse_value)]
        values: Vec<f64>,

        /// Currency symbol printed before amounts
        #[arg(long, default_value = tally::calc::DEFAULT_CURRENCY)]
        currency: String,
    },

    /// Sort files into folders named after their extension
    Organize {
        /// Directory to scan (recursively)
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Destination root (default: the source directory)
        #[arg(long)]
        dest: Option<PathBuf>,

        /// Only show what would be done
        #[arg(long)]
        dry_run: bool,

        /// Copy files instead of moving them
        #[arg(long)]
        copy: bool,
    },
}

/// Parse a number, accepting a comma as decimal separator.
fn parse_value(value: &str) -> Result<f64, String> {
    tally::parse_number(value).ok_or_else(|| format!("'{}' is not a number", value))
}
