//! Moving and copying single files without clobbering existing ones.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::plan::TransferMode;
use crate::error::{Result, TallyError};

/// First free path among `name.ext`, `name_1.ext`, `name_2.ext`, ...
pub fn unique_target(target: &Path) -> PathBuf {
    if !target.exists() {
        return target.to_path_buf();
    }

    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = target.extension().map(|e| e.to_string_lossy().into_owned());

    (1..)
        .map(|i| {
            let name = match &extension {
                Some(ext) => format!("{}_{}.{}", stem, i, ext),
                None => format!("{}_{}", stem, i),
            };
            target.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| target.to_path_buf())
}

/// Move or copy `source` to `target`, creating the parent folder and
/// picking a free name on conflict. Returns the path actually written.
pub fn transfer_file(source: &Path, target: &Path, mode: TransferMode) -> Result<PathBuf> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|e| TallyError::io(parent, e))?;
    }

    let target = unique_target(target);

    match mode {
        TransferMode::Copy => {
            fs::copy(source, &target).map_err(|e| TallyError::io(source, e))?;
        }
        TransferMode::Move => {
            if let Err(e) = fs::rename(source, &target) {
                // Rename cannot cross filesystems; fall back to copy + delete.
                debug!(error = %e, source = %source.display(), "rename failed, copying instead");
                fs::copy(source, &target).map_err(|e| TallyError::io(source, e))?;
                fs::remove_file(source).map_err(|e| TallyError::io(source, e))?;
            }
        }
    }

    info!(
        mode = %mode,
        source = %source.display(),
        target = %target.display(),
        "transferred file"
    );

    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unique_target_free_path() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a.txt");
        assert_eq!(unique_target(&target), target);
    }

    #[test]
    fn test_unique_target_increments() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("a_1.txt"), "").unwrap();

        assert_eq!(
            unique_target(&dir.path().join("a.txt")),
            dir.path().join("a_2.txt")
        );
    }

    #[test]
    fn test_unique_target_without_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("LICENSE"), "").unwrap();

        assert_eq!(
            unique_target(&dir.path().join("LICENSE")),
            dir.path().join("LICENSE_1")
        );
    }

    #[test]
    fn test_transfer_move_and_copy() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("data.csv");
        fs::write(&source, "a,b\n").unwrap();

        let copied = transfer_file(&source, &dir.path().join("csv/data.csv"), TransferMode::Copy).unwrap();
        assert!(source.exists());
        assert_eq!(fs::read_to_string(&copied).unwrap(), "a,b\n");

        let moved = transfer_file(&source, &dir.path().join("csv/data.csv"), TransferMode::Move).unwrap();
        assert!(!source.exists());
        assert_eq!(moved, dir.path().join("csv/data_1.csv"));
    }
}
