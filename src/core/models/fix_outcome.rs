//! Fix outcome model

use std::path::PathBuf;

use serde::Serialize;

/// Result of running the fixer over one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixOutcome {
    /// The file that was examined
    pub path: PathBuf,

    /// How many NO-BREAK SPACEs were (or would be) replaced
    pub replacements: usize,

    /// Whether the file was rewritten on disk
    pub written: bool,
}

impl FixOutcome {
    /// Whether the file needed any change
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.replacements > 0
    }
}
