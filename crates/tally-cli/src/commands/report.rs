//! Report command - summarize a CSV/TSV file as Markdown.

use std::path::PathBuf;

use colored::Colorize;
use tally::input::parse_delimiter;
use tally::{ReportBuilder, write_report};

pub fn run(
    file: PathBuf,
    out: Option<PathBuf>,
    delimiter: Option<String>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = ReportBuilder::new();
    if let Some(ref d) = delimiter {
        builder = builder.with_delimiter(parse_delimiter(d)?);
    }

    let report = builder.build(&file)?;

    if verbose {
        eprintln!(
            "{} {} ({}, {} rows, {} columns, {} numeric)",
            "Read".cyan().bold(),
            report.source.file.white(),
            report.source.format,
            report.row_count,
            report.column_count(),
            report.summaries.len()
        );
    }

    let mut rendered = if json {
        report.to_json()?
    } else {
        report.to_markdown()
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match out {
        Some(path) => {
            write_report(&rendered, &path)?;
            println!(
                "{} {}",
                "Report written to".green().bold(),
                path.display().to_string().white()
            );
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
