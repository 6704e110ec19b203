//! Organize command - sort files into extension folders.

use std::path::PathBuf;

use colored::Colorize;
use tally::{OrganizeConfig, Organizer, TransferMode};

pub fn run(
    source: PathBuf,
    dest: Option<PathBuf>,
    dry_run: bool,
    copy: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if copy {
        TransferMode::Copy
    } else {
        TransferMode::Move
    };

    let mut config = OrganizeConfig::new(&source).with_mode(mode);
    if let Some(d) = dest {
        config = config.with_destination(d);
    }

    let organizer = Organizer::new(config);
    let plan = organizer.plan()?;

    if verbose {
        eprintln!(
            "{} {} ({} files, {} folders) into {}",
            "Scanned".cyan().bold(),
            source.display().to_string().white(),
            plan.len(),
            plan.by_folder().len(),
            plan.destination.display()
        );
    }

    let transfers = if dry_run {
        let verb = match mode {
            TransferMode::Copy => "WOULD COPY",
            TransferMode::Move => "WOULD MOVE",
        };
        for t in &plan.transfers {
            println!(
                "{} {}: {}  ->  {}",
                "[DRY]".yellow().bold(),
                verb,
                t.source.display(),
                t.target.display()
            );
        }
        plan.transfers.clone()
    } else {
        let verb = match mode {
            TransferMode::Copy => "COPIED".blue(),
            TransferMode::Move => "MOVED".green(),
        };
        let done = organizer.execute(&plan)?;
        for t in &done {
            println!("{}: {}  ->  {}", verb, t.source.display(), t.target.display());
        }
        done
    };

    if !plan.is_empty() {
        println!();
        println!("{}", "By extension:".yellow().bold());
        for (folder, count) in plan.by_folder() {
            println!("  {:15} {}", folder, count);
        }
    }

    println!(
        "{} Files processed: {}",
        "Done.".green().bold(),
        transfers.len().to_string().white().bold()
    );

    Ok(())
}
