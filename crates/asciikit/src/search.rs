//! Substring searching over raw bytes.
//!
//! Positional semantics worth calling out: an empty needle makes
//! [`index_of`] return the starting position itself, while [`last_index_of`]
//! returns the haystack length. Case-insensitive variants fold ASCII letters
//! only.

use bstr::ByteSlice;

/// Empty needles always match.
#[must_use]
pub fn starts_with(s: &[u8], with: &[u8]) -> bool {
    s.starts_with(with)
}

#[must_use]
pub fn starts_with_ci(s: &[u8], with: &[u8]) -> bool {
    with.len() <= s.len() && crate::compare::equals_ci(&s[..with.len()], with)
}

/// Empty needles always match.
#[must_use]
pub fn ends_with(s: &[u8], with: &[u8]) -> bool {
    s.ends_with(with)
}

#[must_use]
pub fn ends_with_ci(s: &[u8], with: &[u8]) -> bool {
    with.len() <= s.len() && crate::compare::equals_ci(&s[s.len() - with.len()..], with)
}

/// Position of the first occurrence of `of` at or after `start_pos`.
///
/// An empty needle yields `Some(start_pos)`. Contract:
/// `start_pos <= s.len()`.
#[must_use]
pub fn index_of(s: &[u8], of: &[u8], start_pos: usize) -> Option<usize> {
    debug_assert!(start_pos <= s.len());
    if of.is_empty() {
        return Some(start_pos);
    }
    s[start_pos..].find(of).map(|p| p + start_pos)
}

#[must_use]
pub fn index_of_ci(s: &[u8], of: &[u8], start_pos: usize) -> Option<usize> {
    debug_assert!(start_pos <= s.len());
    if of.is_empty() {
        return Some(start_pos);
    }
    let haystack = s[start_pos..].to_ascii_lowercase();
    let needle = of.to_ascii_lowercase();
    haystack.find(&needle).map(|p| p + start_pos)
}

/// Position of the last occurrence of `of` at or after `start_pos`.
///
/// An empty needle yields `Some(s.len())`, not `Some(start_pos)`. Contract:
/// `start_pos <= s.len()`.
#[must_use]
pub fn last_index_of(s: &[u8], of: &[u8], start_pos: usize) -> Option<usize> {
    debug_assert!(start_pos <= s.len());
    if of.is_empty() {
        return Some(s.len());
    }
    s[start_pos..].rfind(of).map(|p| p + start_pos)
}

#[must_use]
pub fn last_index_of_ci(s: &[u8], of: &[u8], start_pos: usize) -> Option<usize> {
    debug_assert!(start_pos <= s.len());
    if of.is_empty() {
        return Some(s.len());
    }
    let haystack = s[start_pos..].to_ascii_lowercase();
    let needle = of.to_ascii_lowercase();
    haystack.rfind(&needle).map(|p| p + start_pos)
}

#[must_use]
pub fn find(s: &[u8], what: &[u8], start_pos: usize) -> bool {
    index_of(s, what, start_pos).is_some()
}

#[must_use]
pub fn find_ci(s: &[u8], what: &[u8], start_pos: usize) -> bool {
    index_of_ci(s, what, start_pos).is_some()
}

/// Whether every byte of `s` occurs somewhere in `of_charset`.
///
/// An empty `s` against a non-empty charset is `false`; empty against empty
/// is vacuously `true`.
#[must_use]
pub fn is_subset_of(s: &[u8], of_charset: &[u8]) -> bool {
    if s.is_empty() {
        return of_charset.is_empty();
    }
    s.iter().all(|b| of_charset.contains(b))
}

/// Count of non-overlapping occurrences of `substring`, scanning from
/// `start_pos`.
///
/// Contract: `substring` is non-empty, and `start_pos < s.len()` unless `s`
/// is empty with `start_pos == 0`.
#[must_use]
pub fn num_substrings(s: &[u8], substring: &[u8], start_pos: usize) -> usize {
    debug_assert!(!substring.is_empty());
    debug_assert!(start_pos < s.len() || (s.is_empty() && start_pos == 0));

    let mut count = 0;
    let mut pos = start_pos;
    while let Some(found) = index_of(s, substring, pos) {
        count += 1;
        pos = found + substring.len();
    }
    count
}
