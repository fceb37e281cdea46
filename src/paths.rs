//! Path handling for nbscan
//!
//! Turns the paths given on the command line into the ordered list of files
//! to scan.
//!
//! - A file argument is always scanned, even if an exclude pattern matches it.
//! - A directory argument is walked recursively in file name order. Symlinks
//!   are not followed, hidden entries and excluded paths are skipped.
//! - A file given twice (or reached twice), under any spelling, is scanned
//!   once, keeping the first spelling.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::adapters::file::ScanError;

/// Project configuration filename
pub const CONFIG_FILE: &str = ".nbscan.toml";

/// Get path to `.nbscan.toml` inside `dir`.
#[must_use]
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Options that steer directory walking
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Compiled exclude globs, matched against paths relative to the walked root
    pub exclude: Vec<Pattern>,

    /// Walk into hidden directories and keep hidden files
    pub include_hidden: bool,
}

/// Expand command-line paths into the files to scan
///
/// Fails before anything is scanned if any input does not exist.
pub fn collect_targets(
    inputs: &[PathBuf],
    options: &CollectOptions,
) -> Result<Vec<PathBuf>, ScanError> {
    if let Some(missing) = inputs.iter().find(|p| !p.exists()) {
        return Err(ScanError::NotFound(missing.clone()));
    }

    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for input in inputs {
        let found = if input.is_dir() {
            walk_dir(input, options)?
        } else {
            vec![input.clone()]
        };

        for path in found {
            if seen.insert(identity(&path)) {
                targets.push(path);
            }
        }
    }

    log::debug!("Collected {} file(s) from {} input(s)", targets.len(), inputs.len());
    Ok(targets)
}

/// Key used to spot the same file under different spellings
/// (`a.txt`, `./a.txt`, `dir/../a.txt`).
fn identity(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn walk_dir(root: &Path, options: &CollectOptions) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || keep_entry(entry, root, options));

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn keep_entry(entry: &DirEntry, root: &Path, options: &CollectOptions) -> bool {
    if !options.include_hidden && is_hidden(entry) {
        log::trace!("Skipping hidden {}", entry.path().display());
        return false;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
    if options.exclude.iter().any(|p| p.matches_path(relative)) {
        log::debug!("Excluded {}", entry.path().display());
        return false;
    }

    true
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}
