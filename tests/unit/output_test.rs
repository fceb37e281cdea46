//! Tests for the Output module
//!
//! Scan reports render as raw diagnostic lines or as JSON.

use std::path::PathBuf;

use nbscan::core::models::{FileReport, Finding, FixOutcome};
use nbscan::output::{FixReport, OutputMode, ScanReport};

fn finding(line: usize, bytes: &[u8], columns: Vec<usize>) -> Finding {
    Finding {
        line,
        bytes: bytes.to_vec(),
        columns,
    }
}

fn render(report: &ScanReport, mode: OutputMode) -> Vec<u8> {
    let mut out = Vec::new();
    report.write_to(&mut out, mode).unwrap();
    out
}

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// Human rendering
// =============================================================================

#[test]
fn clean_report_prints_nothing() {
    let mut report = ScanReport::default();
    report.push(FileReport {
        path: PathBuf::from("a.txt"),
        findings: vec![],
    });

    assert!(render(&report, OutputMode::Human).is_empty());
    assert!(report.is_clean());
}

#[test]
fn single_file_prints_line_and_raw_bytes() {
    let mut report = ScanReport::default();
    report.push(FileReport {
        path: PathBuf::from("a.txt"),
        findings: vec![finding(3, b"x\xC2\xA0y", vec![1])],
    });

    assert_eq!(render(&report, OutputMode::Human), b"3 x\xC2\xA0y\n");
}

#[test]
fn raw_bytes_are_not_sanitised() {
    let mut report = ScanReport::default();
    report.push(FileReport {
        path: PathBuf::from("bin.dat"),
        findings: vec![finding(1, b"\xFF\xC2\xA0", vec![1])],
    });

    assert_eq!(render(&report, OutputMode::Human), b"1 \xFF\xC2\xA0\n");
}

#[test]
fn multiple_files_are_prefixed_with_path() {
    let mut report = ScanReport::default();
    report.push(FileReport {
        path: PathBuf::from("a.txt"),
        findings: vec![finding(2, b"a\xC2\xA0", vec![1])],
    });
    report.push(FileReport {
        path: PathBuf::from("b.txt"),
        findings: vec![],
    });

    assert_eq!(render(&report, OutputMode::Human), b"a.txt:2 a\xC2\xA0\n");
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.lines_flagged(), 1);
}

// =============================================================================
// JSON rendering
// =============================================================================

#[test]
fn json_summary_lists_only_flagged_files() {
    let mut report = ScanReport::default();
    report.push(FileReport {
        path: PathBuf::from("a.txt"),
        findings: vec![finding(1, b"\xC2\xA0a\xC2\xA0", vec![0, 3]), finding(4, b"\xC2\xA0", vec![0])],
    });
    report.push(FileReport {
        path: PathBuf::from("b.txt"),
        findings: vec![],
    });

    let out = render(&report, OutputMode::Json);
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["files_scanned"], 2);
    assert_eq!(json["lines_flagged"], 2);
    assert_eq!(json["files"].as_array().unwrap().len(), 1);
    assert_eq!(json["files"][0]["path"], "a.txt");
    assert_eq!(json["files"][0]["findings"][0]["columns"], serde_json::json!([0, 3]));
    assert_eq!(json["files"][0]["findings"][0]["text"], "\u{a0}a\u{a0}");
}

// =============================================================================
// Fix report
// =============================================================================

#[test]
fn fix_report_keeps_changed_files_only() {
    let outcomes = vec![
        FixOutcome {
            path: PathBuf::from("a.txt"),
            replacements: 2,
            written: true,
        },
        FixOutcome {
            path: PathBuf::from("b.txt"),
            replacements: 0,
            written: false,
        },
    ];

    let report = FixReport::new(outcomes, false);

    assert_eq!(report.files_checked, 2);
    assert_eq!(report.fixed.len(), 1);
    assert_eq!(report.replacements(), 2);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"dry_run\":false"));
    assert!(json.contains("\"written\":true"));
}

#[test]
fn fix_report_human_lines() {
    let outcomes = vec![FixOutcome {
        path: PathBuf::from("a.txt"),
        replacements: 2,
        written: false,
    }];
    let report = FixReport::new(outcomes, true);

    let mut out = Vec::new();
    report.write_to(&mut out, OutputMode::Human).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Would fix"));
    assert!(text.contains("a.txt (2 replacement(s))"));
}

#[test]
fn fix_report_nothing_to_fix() {
    let report = FixReport::new(vec![], false);

    let mut out = Vec::new();
    report.write_to(&mut out, OutputMode::Human).unwrap();

    assert_eq!(out, b"No NO-BREAK SPACE found in 0 file(s).\n");
}

#[test]
fn fix_report_json_into_writer() {
    let report = FixReport::new(vec![], true);

    let mut out = Vec::new();
    report.write_to(&mut out, OutputMode::Json).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["dry_run"], true);
    assert_eq!(json["files_checked"], 0);
}

/// Writer that always fails, like stdout after the reader hung up
struct ClosedPipe;

impl std::io::Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_errors_are_returned_not_panicked() {
    let report = FixReport::new(vec![], false);
    let err = report.write_to(&mut ClosedPipe, OutputMode::Human).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);

    let mut scan = ScanReport::default();
    scan.push(FileReport {
        path: PathBuf::from("a.txt"),
        findings: vec![finding(1, b"\xC2\xA0", vec![0])],
    });
    assert!(scan.write_to(&mut ClosedPipe, OutputMode::Human).is_err());
}
