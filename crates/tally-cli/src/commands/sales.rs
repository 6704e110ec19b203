//! Sales command - total revenue and average ticket.

use colored::Colorize;
use tally::SalesSummary;
use tally::calc::format_money;

pub fn run(values: Vec<f64>, currency: String) -> Result<(), Box<dyn std::error::Error>> {
    let summary = SalesSummary::compute(&values)?;

    println!("{}", "Sales".yellow().bold());
    println!("- Number of sales: {}", summary.count);
    println!(
        "- Total revenue:   {}",
        format_money(&currency, summary.total).white().bold()
    );
    println!(
        "- Average ticket:  {}",
        format_money(&currency, summary.average_ticket)
    );

    Ok(())
}
