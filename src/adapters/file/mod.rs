//! Filesystem-backed scanning and fixing
//!
//! Wraps the pure services in [`crate::core::services`] with file handles.
//! Every handle is owned by the function that opens it, so it is closed on
//! all exit paths, read errors included.

mod error;

use std::fs::{File, Permissions};
use std::io::{BufReader, Read, Write};
use std::path::Path;

pub use error::ScanError;
use tempfile::NamedTempFile;

use crate::core::models::{Finding, FixOutcome};
use crate::core::services::{fix_bytes, scan_reader};

/// Scan one file for lines containing NO-BREAK SPACE
///
/// The file is opened read-only and never modified.
pub fn scan_file(path: &Path) -> Result<Vec<Finding>, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    scan_reader(BufReader::new(file)).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace every NO-BREAK SPACE in a file with an ASCII space
///
/// The file is only rewritten when something changed and `dry_run` is false.
pub fn fix_file(path: &Path, dry_run: bool) -> Result<FixOutcome, ScanError> {
    let mut file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let read_err = |source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut content = Vec::new();
    file.read_to_end(&mut content).map_err(read_err)?;
    let permissions = file.metadata().map_err(read_err)?.permissions();
    drop(file);

    let (fixed, replacements) = fix_bytes(&content);
    let written = replacements > 0 && !dry_run;

    if written {
        replace_contents(path, &fixed, permissions)?;
        log::info!("Rewrote {} ({replacements} replacement(s))", path.display());
    }

    Ok(FixOutcome {
        path: path.to_path_buf(),
        replacements,
        written,
    })
}

/// Write `content` to a temporary file next to `path`, then rename it over
/// `path`. A failed write leaves the original file intact.
fn replace_contents(path: &Path, content: &[u8], permissions: Permissions) -> Result<(), ScanError> {
    let write_err = |source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.as_file().set_permissions(permissions).map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;

    Ok(())
}
