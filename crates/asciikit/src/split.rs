//! Substring extraction and splitting.

use alloc::{vec, vec::Vec};

use crate::{pattern::Delimiters, search};

/// Returns the substring of `length` bytes starting at `start_pos`;
/// `None` means "to the end".
///
/// Special case: `start_pos == s.len()` with an omitted or zero length
/// yields the empty string. Contract: `start_pos + length <= s.len()`.
#[must_use]
pub fn substr(s: &[u8], start_pos: usize, length: Option<usize>) -> Vec<u8> {
    debug_assert!(start_pos < s.len() || (start_pos == s.len() && length.unwrap_or(0) == 0));
    let end = match length {
        Some(length) => {
            debug_assert!(start_pos + length <= s.len());
            start_pos + length
        }
        None => s.len(),
    };
    s[start_pos..end].to_vec()
}

/// Returns the substring over the half-open range `[start_pos, end_pos)`.
#[must_use]
pub fn substring(s: &[u8], start_pos: usize, end_pos: usize) -> Vec<u8> {
    debug_assert!(start_pos <= end_pos);
    substr(s, start_pos, Some(end_pos - start_pos))
}

/// Splits `s` on a delimiter, or on an ordered list of delimiters applied
/// in successive passes (each pass re-splits every fragment of the last).
///
/// A non-empty delimiter always yields `occurrences + 1` fragments, so
/// boundary and consecutive delimiters produce empty fragments. The empty
/// delimiter explodes the string into single-byte fragments; splitting the
/// empty string that way yields one empty fragment.
#[must_use]
pub fn split<'a>(s: &[u8], delimiters: impl Into<Delimiters<'a>>) -> Vec<Vec<u8>> {
    match delimiters.into() {
        Delimiters::One(delimiter) => split_one(s, delimiter),
        Delimiters::Many(delimiters) => {
            let mut fragments = vec![s.to_vec()];
            for delimiter in delimiters {
                let mut next_pass = Vec::with_capacity(fragments.len());
                for fragment in &fragments {
                    next_pass.append(&mut split_one(fragment, delimiter));
                }
                fragments = next_pass;
            }
            fragments
        }
    }
}

/// Splits `s` into its constituting characters.
#[must_use]
pub fn split_into_chars(s: &[u8]) -> Vec<Vec<u8>> {
    split_one(s, b"")
}

fn split_one(s: &[u8], delimiter: &[u8]) -> Vec<Vec<u8>> {
    if delimiter.is_empty() {
        if s.is_empty() {
            return vec![Vec::new()];
        }
        return s.iter().map(|&b| vec![b]).collect();
    }

    let mut fragments = Vec::new();
    let mut start = 0;
    while let Some(end) = search::index_of(s, delimiter, start) {
        fragments.push(s[start..end].to_vec());
        start = end + delimiter.len();
    }
    fragments.push(s[start..].to_vec());
    fragments
}
