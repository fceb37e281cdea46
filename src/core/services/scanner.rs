//! NO-BREAK SPACE scanner
//!
//! Lines are split after every `\n` byte; a trailing segment without a
//! newline is a line too. A line is flagged when its raw bytes contain the
//! UTF-8 encoding of U+00A0, no matter how many times.
//!
//! # Examples
//!
//! ```
//! use nbscan::core::services::scan_bytes;
//!
//! let findings = scan_bytes(b"plain\nno\xC2\xA0break\n");
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].line, 2);
//! assert_eq!(findings[0].bytes, b"no\xC2\xA0break");
//! ```

use std::io::{self, BufRead};

use crate::core::models::Finding;

/// UTF-8 encoding of U+00A0 NO-BREAK SPACE
pub const NBSP: [u8; 2] = [0xC2, 0xA0];

/// Whether `bytes` contains at least one NO-BREAK SPACE
#[must_use]
pub fn contains_nbsp(bytes: &[u8]) -> bool {
    bytes.windows(NBSP.len()).any(|w| w == NBSP)
}

/// Byte offsets of every NO-BREAK SPACE in `bytes`
#[must_use]
pub fn nbsp_columns(bytes: &[u8]) -> Vec<usize> {
    bytes
        .windows(NBSP.len())
        .enumerate()
        .filter(|(_, w)| *w == NBSP)
        .map(|(i, _)| i)
        .collect()
}

/// Scan an in-memory buffer
#[must_use]
pub fn scan_bytes(bytes: &[u8]) -> Vec<Finding> {
    bytes
        .split_inclusive(|&b| b == b'\n')
        .enumerate()
        .filter_map(|(idx, raw)| finding_for(idx + 1, raw))
        .collect()
}

/// Scan a buffered reader line by line
///
/// Only one line is held in memory at a time.
pub fn scan_reader<R: BufRead>(mut reader: R) -> io::Result<Vec<Finding>> {
    let mut findings = Vec::new();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;
        if let Some(finding) = finding_for(line, &buf) {
            findings.push(finding);
        }
    }

    Ok(findings)
}

fn finding_for(line: usize, raw: &[u8]) -> Option<Finding> {
    let bytes = strip_terminator(raw);
    let columns = nbsp_columns(bytes);
    if columns.is_empty() {
        return None;
    }
    Some(Finding {
        line,
        bytes: bytes.to_vec(),
        columns,
    })
}

/// Drop a trailing `\n` or `\r\n`
fn strip_terminator(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}
