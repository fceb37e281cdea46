//! Adapters between the pure core and the outside world
//!
//! - [`file`] - Filesystem-backed scanning and fixing

pub mod file;
