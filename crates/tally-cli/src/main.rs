//! Tally CLI - small data utilities.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Report {
            file,
            out,
            delimiter,
            json,
        } => commands::report::run(file, out, delimiter, json, cli.verbose),

        Commands::Grades {
            values,
            passing_mark,
        } => commands::grades::run(values, passing_mark),

        Commands::Sales { values, currency } => commands::sales::run(values, currency),

        Commands::Organize {
            source,
            dest,
            dry_run,
            copy,
        } => commands::organize::run(source, dest, dry_run, copy, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
