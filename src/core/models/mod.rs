//! Domain models for nbscan
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Finding`] - A line that contains at least one NO-BREAK SPACE
//! - [`FileReport`] - All findings for one scanned file
//! - [`FixOutcome`] - What the fixer did to one file

mod finding;
mod fix_outcome;

pub use finding::{FileReport, Finding};
pub use fix_outcome::FixOutcome;
