//! Scanning a directory tree into a plan of file transfers.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::transfer::transfer_file;
use crate::error::{Result, TallyError};

/// Folder for files that have no extension.
pub const NO_EXTENSION_DIR: &str = "no_extension";

/// Whether files are moved or copied into place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMode {
    #[default]
    Move,
    Copy,
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferMode::Move => write!(f, "move"),
            TransferMode::Copy => write!(f, "copy"),
        }
    }
}

/// Organizer configuration.
#[derive(Debug, Clone)]
pub struct OrganizeConfig {
    /// Directory scanned recursively for files.
    pub source: PathBuf,
    /// Root of the extension folders (None = the source itself).
    pub destination: Option<PathBuf>,
    /// Move or copy.
    pub mode: TransferMode,
}

impl OrganizeConfig {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: None,
            mode: TransferMode::default(),
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_mode(mut self, mode: TransferMode) -> Self {
        self.mode = mode;
        self
    }

    /// Destination root, defaulting to the source.
    pub fn destination(&self) -> &Path {
        self.destination.as_deref().unwrap_or(&self.source)
    }
}

/// One file and where it should end up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Extension folder the file belongs to.
    pub folder: String,
}

/// Ordered list of transfers computed before anything is touched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizePlan {
    pub destination: PathBuf,
    pub mode: TransferMode,
    pub transfers: Vec<Transfer>,
}

impl OrganizePlan {
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Number of files per extension folder, in first-seen order.
    pub fn by_folder(&self) -> IndexMap<String, usize> {
        let mut counts = IndexMap::new();
        for transfer in &self.transfers {
            *counts.entry(transfer.folder.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Folder name for a file: its lowercased extension, or `no_extension`.
pub fn extension_folder(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| NO_EXTENSION_DIR.to_string())
}

/// Plans and performs the organizing of a directory.
pub struct Organizer {
    config: OrganizeConfig,
}

impl Organizer {
    pub fn new(config: OrganizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrganizeConfig {
        &self.config
    }

    /// Scan the source and list the transfers to perform.
    ///
    /// The scan finishes before any file is touched. A destination nested
    /// inside the source is not scanned, and files already sitting in their
    /// extension folder are left out.
    pub fn plan(&self) -> Result<OrganizePlan> {
        let source = &self.config.source;
        if !source.is_dir() {
            return Err(TallyError::InvalidDirectory {
                path: source.clone(),
            });
        }

        let destination = self.config.destination();
        let source_root = fs::canonicalize(source).map_err(|e| TallyError::io(source, e))?;
        let destination_root = fs::canonicalize(destination).ok();
        let skip_subtree = destination_root
            .as_ref()
            .filter(|dest| **dest != source_root && dest.starts_with(&source_root))
            .cloned();

        let walker = WalkDir::new(source)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let excluded = entry.file_type().is_dir()
                    && skip_subtree.as_ref().is_some_and(|skip| {
                        fs::canonicalize(entry.path()).is_ok_and(|p| p == *skip)
                    });
                if excluded {
                    debug!(path = %entry.path().display(), "skipping destination subtree");
                }
                !excluded
            });

        let mut transfers = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error walking directory {}: {}", source.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let folder = extension_folder(path);
            let target_dir = destination.join(&folder);

            if already_in_place(path, &target_dir) {
                debug!(path = %path.display(), "already organized");
                continue;
            }

            transfers.push(Transfer {
                source: path.to_path_buf(),
                target: target_dir.join(entry.file_name()),
                folder,
            });
        }

        info!(
            source = %source.display(),
            destination = %destination.display(),
            files = transfers.len(),
            "planned transfers"
        );

        Ok(OrganizePlan {
            destination: destination.to_path_buf(),
            mode: self.config.mode,
            transfers,
        })
    }

    /// Perform a plan, returning each transfer with its final target.
    ///
    /// Targets that already exist get a numeric suffix instead of being
    /// overwritten.
    pub fn execute(&self, plan: &OrganizePlan) -> Result<Vec<Transfer>> {
        let mut done = Vec::with_capacity(plan.len());
        for transfer in &plan.transfers {
            let target = transfer_file(&transfer.source, &transfer.target, plan.mode)?;
            done.push(Transfer {
                source: transfer.source.clone(),
                target,
                folder: transfer.folder.clone(),
            });
        }
        Ok(done)
    }
}

fn already_in_place(path: &Path, target_dir: &Path) -> bool {
    let parent = match path.parent().and_then(|p| fs::canonicalize(p).ok()) {
        Some(parent) => parent,
        None => return false,
    };
    fs::canonicalize(target_dir).is_ok_and(|dir| dir == parent)
}
