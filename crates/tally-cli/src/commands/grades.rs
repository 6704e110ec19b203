//! Grades command - statistics and verdict for a list of grades.

use colored::Colorize;
use tally::{GradeSummary, Verdict};

pub fn run(values: Vec<f64>, passing_mark: f64) -> Result<(), Box<dyn std::error::Error>> {
    let summary = GradeSummary::compute(&values, passing_mark)?;

    let verdict = match summary.verdict {
        Verdict::Approved => summary.verdict.to_string().green().bold(),
        Verdict::Failed => summary.verdict.to_string().red().bold(),
    };

    println!("{}", "Grades".yellow().bold());
    println!("- Count:   {}", summary.count);
    println!("- Mean:    {:.2}", summary.mean);
    println!("- Median:  {:.2}", summary.median);
    println!("- Minimum: {:.2}", summary.min);
    println!("- Maximum: {:.2}", summary.max);
    println!(
        "- Result:  {} (passing mark: {:.2})",
        verdict, summary.passing_mark
    );

    Ok(())
}
