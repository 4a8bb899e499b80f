//! Trimming and whitespace/newline normalization.
//!
//! The trimmable byte class is `[0x00, 0x20]` plus `[0x7F, 0xFF]`: control
//! characters, space, DEL, and every byte invalid in ASCII.

use alloc::vec::Vec;

/// The default newline, LF.
pub const NEWLINE: &[u8] = NEWLINE_LF;
/// LF newline (0x0A), used by Linux and macOS.
pub const NEWLINE_LF: &[u8] = b"\x0A";
/// CRLF newline (0x0D 0x0A), used by Windows.
pub const NEWLINE_CRLF: &[u8] = b"\x0D\x0A";
/// CR newline (0x0D).
pub const NEWLINE_CR: &[u8] = b"\x0D";

fn is_trimmable(b: u8) -> bool {
    b <= 0x20 || b >= 0x7F
}

fn trimmed_range(s: &[u8]) -> (usize, usize) {
    let from = s.iter().position(|&b| !is_trimmable(b)).unwrap_or(s.len());
    let to = s.iter().rposition(|&b| !is_trimmable(b)).map_or(from, |p| p + 1);
    (from, to)
}

/// Strips the run of trimmable bytes from the start.
#[must_use]
pub fn trim_start(s: &[u8]) -> Vec<u8> {
    let from = s.iter().position(|&b| !is_trimmable(b)).unwrap_or(s.len());
    s[from..].to_vec()
}

/// Strips the run of trimmable bytes from the end.
#[must_use]
pub fn trim_end(s: &[u8]) -> Vec<u8> {
    let to = s.iter().rposition(|&b| !is_trimmable(b)).map_or(0, |p| p + 1);
    s[..to].to_vec()
}

/// Strips trimmable runs from both ends.
#[must_use]
pub fn trim(s: &[u8]) -> Vec<u8> {
    let (from, to) = trimmed_range(s);
    s[from..to].to_vec()
}

/// Trims both ends, then collapses every internal run of trimmable bytes
/// into a single space.
#[must_use]
pub fn norm_spacing(s: &[u8]) -> Vec<u8> {
    let (from, to) = trimmed_range(s);
    let mut out = Vec::with_capacity(to - from);
    let mut in_run = false;
    for &b in &s[from..to] {
        if is_trimmable(b) {
            in_run = true;
        } else {
            if in_run {
                out.push(b' ');
                in_run = false;
            }
            out.push(b);
        }
    }
    out
}

/// Replaces every newline variant with `newline`.
///
/// The known variants are CRLF, LF, VT (0x0B), FF (0x0C), and CR; CRLF is
/// matched first so the pair is never split into two replacements.
#[must_use]
pub fn norm_newlines(s: &[u8], newline: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;
    while i < s.len() {
        match s[i] {
            b'\r' if s.get(i + 1) == Some(&b'\n') => {
                out.extend_from_slice(newline);
                i += 2;
            }
            b'\n' | 0x0B | 0x0C | b'\r' => {
                out.extend_from_slice(newline);
                i += 1;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }
    out
}
