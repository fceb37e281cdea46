//! NO-BREAK SPACE fixer
//!
//! Replaces every `0xC2 0xA0` pair with a single ASCII space (`0x20`).
//! All other bytes, line terminators included, are left untouched.

use super::scanner::NBSP;

/// Replace every NO-BREAK SPACE in `bytes`
///
/// Returns the rewritten buffer and the number of replacements.
#[must_use]
pub fn fix_bytes(bytes: &[u8]) -> (Vec<u8>, usize) {
    let mut out = Vec::with_capacity(bytes.len());
    let mut replaced = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i..].starts_with(&NBSP) {
            out.push(b' ');
            replaced += 1;
            i += NBSP.len();
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    (out, replaced)
}
