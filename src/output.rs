//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! raw diagnostic lines or machine-parseable JSON.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{FileReport, Finding, FixOutcome};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a scan over one or more files
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Number of files scanned, clean ones included
    pub files_scanned: usize,
    /// Per-file findings, in scan order
    pub files: Vec<FileReport>,
}

/// JSON shape of a [`ScanReport`]
#[derive(Debug, Serialize)]
pub struct ScanSummary {
    /// Number of files scanned
    pub files_scanned: usize,
    /// Total flagged lines across all files
    pub lines_flagged: usize,
    /// Files with at least one flagged line
    pub files: Vec<FileFindings>,
}

/// Flagged lines of one file
#[derive(Debug, Serialize)]
pub struct FileFindings {
    /// File path
    pub path: String,
    /// Flagged lines
    pub findings: Vec<FindingInfo>,
}

/// One flagged line
#[derive(Debug, Serialize)]
pub struct FindingInfo {
    /// 1-based line number
    pub line: usize,
    /// Byte offsets of each NO-BREAK SPACE
    pub columns: Vec<usize>,
    /// Line text (lossy UTF-8)
    pub text: String,
}

impl From<&Finding> for FindingInfo {
    fn from(finding: &Finding) -> Self {
        Self {
            line: finding.line,
            columns: finding.columns.clone(),
            text: finding.text(),
        }
    }
}

impl ScanReport {
    /// Add the findings for one scanned file
    pub fn push(&mut self, report: FileReport) {
        self.files_scanned += 1;
        self.files.push(report);
    }

    /// Total flagged lines
    #[must_use]
    pub fn lines_flagged(&self) -> usize {
        self.files.iter().map(|f| f.findings.len()).sum()
    }

    /// Whether nothing was flagged
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(FileReport::is_clean)
    }

    /// Build the JSON shape
    #[must_use]
    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            files_scanned: self.files_scanned,
            lines_flagged: self.lines_flagged(),
            files: self
                .files
                .iter()
                .filter(|f| !f.is_clean())
                .map(|f| FileFindings {
                    path: f.path.display().to_string(),
                    findings: f.findings.iter().map(FindingInfo::from).collect(),
                })
                .collect(),
        }
    }

    /// Render the result to stdout based on output mode
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, mode)?;
        out.flush()
    }

    /// Render the result into any writer
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.write_human(out),
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(&self.summary()).unwrap_or_default();
                writeln!(out, "{json}")
            },
        }
    }

    /// `<line> <raw bytes>` per finding, prefixed with `<path>:` when more
    /// than one file was scanned. Line bytes are written unmodified.
    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let with_path = self.files_scanned > 1;

        for file in &self.files {
            for finding in &file.findings {
                if with_path {
                    write!(out, "{}:", file.path.display())?;
                }
                write!(out, "{} ", finding.line)?;
                out.write_all(&finding.bytes)?;
                out.write_all(b"\n")?;
            }
        }

        Ok(())
    }
}

/// Result of a fix run
#[derive(Debug, Serialize)]
pub struct FixReport {
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Files that needed changes
    pub fixed: Vec<FixOutcome>,
    /// Number of files examined
    pub files_checked: usize,
}

impl FixReport {
    /// Collect outcomes, keeping only files that needed changes
    #[must_use]
    pub fn new(outcomes: Vec<FixOutcome>, dry_run: bool) -> Self {
        let files_checked = outcomes.len();
        Self {
            dry_run,
            fixed: outcomes.into_iter().filter(FixOutcome::changed).collect(),
            files_checked,
        }
    }

    /// Total replacements across all files
    #[must_use]
    pub fn replacements(&self) -> usize {
        self.fixed.iter().map(|o| o.replacements).sum()
    }

    /// Render the result to stdout based on output mode
    pub fn render(&self, mode: OutputMode) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, mode)?;
        out.flush()
    }

    /// Render the result into any writer
    pub fn write_to<W: Write>(&self, out: &mut W, mode: OutputMode) -> io::Result<()> {
        match mode {
            OutputMode::Human => self.write_human(out),
            OutputMode::Json => {
                let json = serde_json::to_string_pretty(self).unwrap_or_default();
                writeln!(out, "{json}")
            },
        }
    }

    fn write_human<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.fixed.is_empty() {
            return writeln!(out, "No NO-BREAK SPACE found in {} file(s).", self.files_checked);
        }

        let verb = if self.dry_run { "Would fix" } else { "Fixed" };
        for outcome in &self.fixed {
            writeln!(out, "{}", fix_line(verb, &outcome.path, outcome.replacements))?;
        }
        Ok(())
    }
}

fn fix_line(verb: &str, path: &Path, replacements: usize) -> String {
    format!("{} {} ({replacements} replacement(s))", verb.green(), path.display())
}
