//! Plan file discovery.
//!
//! Plans live under `<root>/<business-unit>/<account>/`, at any depth below
//! the account directory. Each account may hold at most one plan file.
//! Symlinked directories are followed.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{DiscoveryError, Result};

/// A plan file and the account it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanArtifact {
    /// Path to the plan file.
    pub path: PathBuf,
    /// Account label, `<business-unit>/<account>`.
    pub account: String,
}

/// Finds one plan file per account under `root`.
///
/// # Errors
///
/// Returns an error if `root` is not a directory, a directory cannot be
/// read, or an account holds more than one plan file.
pub fn discover(root: impl AsRef<Path>, file_name: &str) -> Result<Vec<PlanArtifact>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(DiscoveryError::RootNotFound {
            path: root.to_path_buf(),
        }
        .into());
    }
    debug!("Looking for plan files in {}", root.display());

    let mut artifacts = Vec::new();
    for business_unit in subdirectories(root)? {
        for account_dir in subdirectories(&business_unit)? {
            let account = format!(
                "{}/{}",
                dir_name(&business_unit),
                dir_name(&account_dir)
            );

            let mut plan_files = find_files(&account_dir, file_name)?;
            match plan_files.len() {
                0 => debug!("No plan file for {account}"),
                1 => {
                    let path = plan_files.remove(0);
                    debug!("Found plan file for {account}: {}", path.display());
                    artifacts.push(PlanArtifact { path, account });
                }
                count => {
                    return Err(DiscoveryError::MultiplePlanFiles { account, count }.into());
                }
            }
        }
    }

    Ok(artifacts)
}

/// Lists the immediate subdirectories of `dir`, sorted by path.
fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(dir, &e))?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

/// Recursively finds files named `file_name` below `dir`.
fn find_files(dir: &Path, file_name: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(dir, &e))?;
        if entry.file_type().is_file() && entry.file_name() == file_name {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn walk_error(dir: &Path, error: &walkdir::Error) -> DiscoveryError {
    DiscoveryError::Walk {
        path: dir.to_path_buf(),
        message: error.to_string(),
    }
}
