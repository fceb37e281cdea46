//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use nbscan::core::services::{contains_nbsp, fix_bytes, scan_bytes};
use test_case::test_case;

// =============================================================================
// Detection Tests
// =============================================================================

#[test_case(b"\xC2\xA0", true ; "bare nbsp")]
#[test_case(b"a\xC2\xA0b", true ; "nbsp between letters")]
#[test_case(b"a b", false ; "ascii space")]
#[test_case(b"\xE2\x80\xAF", false ; "narrow nbsp is a different char")]
#[test_case(b"\xC2\xA9", false ; "copyright sign shares lead byte")]
#[test_case(b"\xC3\xA0", false ; "a grave shares trail byte")]
#[test_case(b"\xC2", false ; "truncated sequence")]
#[test_case(b"", false ; "empty")]
fn test_contains_nbsp(input: &[u8], expected: bool) {
    assert_eq!(contains_nbsp(input), expected);
}

// =============================================================================
// Line Numbering Tests
// =============================================================================

#[test_case(b"\xC2\xA0", &[1] ; "single line no newline")]
#[test_case(b"\n\xC2\xA0\n", &[2] ; "after blank line")]
#[test_case(b"\xC2\xA0\n\n\n\xC2\xA0\n", &[1, 4] ; "first and fourth")]
#[test_case(b"a\r\nb\r\n\xC2\xA0\r\n", &[3] ; "crlf file")]
#[test_case(b"\r\xC2\xA0\n", &[1] ; "lone cr does not split")]
fn test_reported_lines(input: &[u8], expected: &[usize]) {
    let lines: Vec<usize> = scan_bytes(input).iter().map(|f| f.line).collect();
    assert_eq!(lines, expected);
}

// =============================================================================
// Fix Tests
// =============================================================================

#[test_case(b"\xC2\xA0", b" ", 1 ; "bare")]
#[test_case(b"\xC2\xC2\xA0", b"\xC2 ", 1 ; "stray lead byte kept")]
#[test_case(b"\xC2\xA0\xA0", b" \xA0", 1 ; "stray trail byte kept")]
#[test_case(b"x", b"x", 0 ; "nothing to fix")]
fn test_fix_bytes(input: &[u8], expected: &[u8], count: usize) {
    let (out, n) = fix_bytes(input);
    assert_eq!(out, expected);
    assert_eq!(n, count);
}
