//! Core domain for nbscan
//!
//! - [`models`] - Findings and per-file outcomes
//! - [`services`] - Scanning and fixing logic

pub mod models;
pub mod services;
