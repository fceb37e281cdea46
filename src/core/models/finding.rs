//! Finding model
//!
//! A finding says: "line N of this file carries a NO-BREAK SPACE".

use std::path::PathBuf;

/// A flagged line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line number
    pub line: usize,

    /// Raw line bytes, without the line terminator
    pub bytes: Vec<u8>,

    /// 0-based byte offsets of each `0xC2 0xA0` pair on the line
    pub columns: Vec<usize>,
}

impl Finding {
    /// Number of NO-BREAK SPACEs on this line
    #[must_use]
    pub const fn occurrences(&self) -> usize {
        self.columns.len()
    }

    /// Lossy UTF-8 rendering of the line, for display
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Findings for one file, in ascending line order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The scanned path, as given or as discovered while walking
    pub path: PathBuf,

    /// Flagged lines
    pub findings: Vec<Finding>,
}

impl FileReport {
    /// Whether the file is free of NO-BREAK SPACEs
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}
