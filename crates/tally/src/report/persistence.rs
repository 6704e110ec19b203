//! Writing rendered reports to disk.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, TallyError};

/// Write a rendered report, creating missing parent directories.
///
/// # Example
///
/// ```no_run
/// # fn example() -> tally::Result<()> {
/// let markdown = tally::make_report("data/sales.csv")?;
/// tally::write_report(&markdown, "out/reports/sales.md")?;
/// # Ok(())
/// # }
/// ```
pub fn write_report(contents: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| TallyError::io(parent, e))?;
        }
    }

    fs::write(path, contents).map_err(|e| TallyError::io(path, e))?;
    info!(path = %path.display(), bytes = contents.len(), "wrote report");

    Ok(())
}
