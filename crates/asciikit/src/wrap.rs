//! Greedy word wrapping.

use alloc::vec::Vec;

/// Wraps `s` to `width` columns by breaking at spaces; each break consumes
/// the space it replaces.
///
/// A run with no spaces that exceeds `width` is force-split into
/// `width`-sized chunks when `break_spaceless_lines` is set, and left
/// overlong otherwise. Contract: `width > 0`.
#[must_use]
pub fn word_wrap(s: &[u8], width: usize, break_spaceless_lines: bool, newline: &[u8]) -> Vec<u8> {
    debug_assert!(width > 0);

    let mut lines: Vec<Vec<u8>> = Vec::new();
    let mut line: Vec<u8> = Vec::new();
    let mut first = true;
    for word in s.split(|&b| b == b' ') {
        let mut word = word;
        if first {
            first = false;
        } else if line.len() + 1 + word.len() <= width {
            line.push(b' ');
            line.extend_from_slice(word);
            continue;
        } else {
            lines.push(core::mem::take(&mut line));
        }
        // The word opens a fresh line; chop it if it cannot fit anywhere.
        if break_spaceless_lines {
            while word.len() > width {
                lines.push(word[..width].to_vec());
                word = &word[width..];
            }
        }
        line.extend_from_slice(word);
    }
    lines.push(line);

    let mut out = Vec::with_capacity(s.len());
    for (i, wrapped) in lines.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(newline);
        }
        out.extend_from_slice(wrapped);
    }
    out
}
