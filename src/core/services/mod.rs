//! Business logic services
//!
//! Pure byte-level logic. These services have no filesystem dependencies;
//! they operate on buffers or readers passed in and return results.
//!
//! - [`scanner`] - Find lines containing NO-BREAK SPACE
//! - [`fixer`] - Replace NO-BREAK SPACE with an ASCII space

pub mod fixer;
pub mod scanner;

pub use fixer::fix_bytes;
pub use scanner::{NBSP, contains_nbsp, nbsp_columns, scan_bytes, scan_reader};
