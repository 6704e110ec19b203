//! Example: Build a report for a delimited file and print its parts.
//!
//! Usage:
//!   cargo run --example report -- <file_path>
//!
//! Example:
//!   cargo run --example report -- data/sales.csv

use std::env;
use std::path::Path;

use tally::ReportBuilder;

fn main() -> tally::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example report -- <file_path>");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example report -- data/sales.csv");
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);
    let report = ReportBuilder::new().build(path)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("File:      {}", report.source.file);
    println!("Format:    {} ({} bytes)", report.source.format, report.source.size_bytes);
    println!("Hash:      {}", report.source.hash);
    println!("Rows:      {}", report.row_count);
    println!("Columns:   {}", report.column_count());
    println!("{}", separator);

    for summary in &report.summaries {
        println!(
            "{:20} n={:<6} min={:<10.2} max={:<10.2} mean={:.2}",
            summary.name, summary.count, summary.min, summary.max, summary.mean
        );
    }

    println!();
    print!("{}", report.to_markdown());

    Ok(())
}
