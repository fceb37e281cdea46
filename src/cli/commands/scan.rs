//! Scan files for NO-BREAK SPACE

use std::path::PathBuf;
use std::process::ExitCode;

use nbscan::adapters::file::scan_file;
use nbscan::config::Config;
use nbscan::core::models::FileReport;
use nbscan::output::{OutputMode, ScanReport};
use nbscan::paths::collect_targets;

/// Scan every target and print the flagged lines
///
/// All targets are scanned before anything is printed, so a failure on any
/// of them leaves stdout empty.
pub fn scan(
    paths: &[PathBuf],
    ci: bool,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let targets = collect_targets(paths, &config.collect_options()?)?;

    let mut report = ScanReport::default();
    for path in targets {
        log::debug!("Scanning {}", path.display());
        let findings = scan_file(&path)?;
        report.push(FileReport { path, findings });
    }

    log::debug!(
        "{} line(s) flagged in {} file(s)",
        report.lines_flagged(),
        report.files_scanned
    );
    report.render(mode)?;

    if (ci || config.scan.fail_on_findings) && !report.is_clean() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
