//! Replace NO-BREAK SPACE with ASCII space

use std::path::PathBuf;

use nbscan::adapters::file::fix_file;
use nbscan::config::Config;
use nbscan::output::{FixReport, OutputMode};
use nbscan::paths::collect_targets;

/// Fix every target in place (or report what would change)
pub fn fix(paths: &[PathBuf], dry_run: bool, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let targets = collect_targets(paths, &config.collect_options()?)?;

    let outcomes = targets
        .iter()
        .map(|path| fix_file(path, dry_run))
        .collect::<Result<Vec<_>, _>>()?;

    let report = FixReport::new(outcomes, dry_run);
    log::debug!(
        "{} replacement(s) across {} file(s)",
        report.replacements(),
        report.fixed.len()
    );
    report.render(mode)?;
    Ok(())
}
