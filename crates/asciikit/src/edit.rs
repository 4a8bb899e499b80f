//! Padding, affix stripping, insertion, and replacement.

use alloc::vec::Vec;

use crate::{pattern::Affixes, search};

/// Grows `s` to `new_length` by prepending repeated (and truncated) copies
/// of `padding`. Contract: `new_length >= s.len()`.
#[must_use]
pub fn pad_start(s: &[u8], padding: &[u8], new_length: usize) -> Vec<u8> {
    debug_assert!(new_length >= s.len());
    let mut out = pad_fill(padding, new_length.saturating_sub(s.len()));
    out.extend_from_slice(s);
    out
}

/// Grows `s` to `new_length` by appending repeated (and truncated) copies
/// of `padding`. Contract: `new_length >= s.len()`.
#[must_use]
pub fn pad_end(s: &[u8], padding: &[u8], new_length: usize) -> Vec<u8> {
    debug_assert!(new_length >= s.len());
    let mut out = s.to_vec();
    out.append(&mut pad_fill(padding, new_length.saturating_sub(s.len())));
    out
}

fn pad_fill(padding: &[u8], count: usize) -> Vec<u8> {
    let mut fill = Vec::with_capacity(count);
    if padding.is_empty() {
        return fill;
    }
    while fill.len() < count {
        let take = (count - fill.len()).min(padding.len());
        fill.extend_from_slice(&padding[..take]);
    }
    fill
}

/// Strips `prefixes` from the start of `s`, in list order; each prefix is
/// stripped repeatedly while it still matches, so stacked layers come off:
/// `strip_start(b"aabbcc", &[b"a", b"b"])` is `"cc"`.
#[must_use]
pub fn strip_start<'a>(s: &[u8], prefixes: impl Into<Affixes<'a>>) -> Vec<u8> {
    strip_front(s, prefixes.into(), false)
}

/// [`strip_start`] with case-insensitive prefix matching.
#[must_use]
pub fn strip_start_ci<'a>(s: &[u8], prefixes: impl Into<Affixes<'a>>) -> Vec<u8> {
    strip_front(s, prefixes.into(), true)
}

/// Strips `suffixes` from the end of `s`, in list order; each suffix is
/// stripped repeatedly while it still matches.
#[must_use]
pub fn strip_end<'a>(s: &[u8], suffixes: impl Into<Affixes<'a>>) -> Vec<u8> {
    strip_back(s, suffixes.into(), false)
}

/// [`strip_end`] with case-insensitive suffix matching.
#[must_use]
pub fn strip_end_ci<'a>(s: &[u8], suffixes: impl Into<Affixes<'a>>) -> Vec<u8> {
    strip_back(s, suffixes.into(), true)
}

fn strip_front(s: &[u8], prefixes: Affixes<'_>, ci: bool) -> Vec<u8> {
    let mut rest = s;
    for prefix in prefixes.iter() {
        if prefix.is_empty() {
            continue;
        }
        loop {
            let matched = if ci {
                search::starts_with_ci(rest, prefix)
            } else {
                rest.starts_with(prefix)
            };
            if !matched {
                break;
            }
            rest = &rest[prefix.len()..];
        }
    }
    rest.to_vec()
}

fn strip_back(s: &[u8], suffixes: Affixes<'_>, ci: bool) -> Vec<u8> {
    let mut rest = s;
    for suffix in suffixes.iter() {
        if suffix.is_empty() {
            continue;
        }
        loop {
            let matched = if ci {
                search::ends_with_ci(rest, suffix)
            } else {
                rest.ends_with(suffix)
            };
            if !matched {
                break;
            }
            rest = &rest[..rest.len() - suffix.len()];
        }
    }
    rest.to_vec()
}

/// Splices `insert_string` into `s` at `at_pos`; `at_pos == s.len()`
/// appends. Contract: `at_pos <= s.len()`.
#[must_use]
pub fn insert(s: &[u8], at_pos: usize, insert_string: &[u8]) -> Vec<u8> {
    debug_assert!(at_pos <= s.len());
    let mut out = Vec::with_capacity(s.len() + insert_string.len());
    out.extend_from_slice(&s[..at_pos]);
    out.extend_from_slice(insert_string);
    out.extend_from_slice(&s[at_pos..]);
    out
}

/// Replaces the `length` bytes starting at `start_pos` with `with`.
/// Contract: the range lies within `s`.
#[must_use]
pub fn replace_substring(s: &[u8], start_pos: usize, length: usize, with: &[u8]) -> Vec<u8> {
    debug_assert!(start_pos < s.len() || (start_pos == s.len() && length == 0));
    debug_assert!(start_pos + length <= s.len());
    let mut out = Vec::with_capacity(s.len() - length + with.len());
    out.extend_from_slice(&s[..start_pos]);
    out.extend_from_slice(with);
    out.extend_from_slice(&s[start_pos + length..]);
    out
}

/// [`replace_substring`] over the half-open range `[start_pos, end_pos)`.
#[must_use]
pub fn replace_substring_by_range(s: &[u8], start_pos: usize, end_pos: usize, with: &[u8]) -> Vec<u8> {
    debug_assert!(start_pos <= end_pos);
    replace_substring(s, start_pos, end_pos - start_pos, with)
}

#[must_use]
pub fn remove_substring(s: &[u8], start_pos: usize, length: usize) -> Vec<u8> {
    replace_substring(s, start_pos, length, b"")
}

#[must_use]
pub fn remove_substring_by_range(s: &[u8], start_pos: usize, end_pos: usize) -> Vec<u8> {
    replace_substring_by_range(s, start_pos, end_pos, b"")
}

/// Replaces every non-overlapping occurrence of `what` with `with`,
/// scanning left to right, and reports how many replacements were made.
/// An empty `what` replaces nothing.
#[must_use]
pub fn replace(s: &[u8], what: &[u8], with: &[u8]) -> (Vec<u8>, usize) {
    replace_impl(s, what, with, false)
}

/// [`replace`] with case-insensitive matching.
#[must_use]
pub fn replace_ci(s: &[u8], what: &[u8], with: &[u8]) -> (Vec<u8>, usize) {
    replace_impl(s, what, with, true)
}

/// Removes every occurrence of `what`, reporting the removal count.
#[must_use]
pub fn remove(s: &[u8], what: &[u8]) -> (Vec<u8>, usize) {
    replace_impl(s, what, b"", false)
}

/// [`remove`] with case-insensitive matching.
#[must_use]
pub fn remove_ci(s: &[u8], what: &[u8]) -> (Vec<u8>, usize) {
    replace_impl(s, what, b"", true)
}

fn replace_impl(s: &[u8], what: &[u8], with: &[u8], ci: bool) -> (Vec<u8>, usize) {
    if what.is_empty() {
        return (s.to_vec(), 0);
    }
    let mut out = Vec::with_capacity(s.len());
    let mut count = 0;
    let mut pos = 0;
    loop {
        let found = if ci {
            search::index_of_ci(s, what, pos)
        } else {
            search::index_of(s, what, pos)
        };
        match found {
            Some(at) => {
                out.extend_from_slice(&s[pos..at]);
                out.extend_from_slice(with);
                pos = at + what.len();
                count += 1;
            }
            None => {
                out.extend_from_slice(&s[pos..]);
                return (out, count);
            }
        }
    }
}

/// Concatenates `s` with itself `times` times. Contract: `times > 0`
/// unless `s` is empty.
#[must_use]
pub fn repeat(s: &[u8], times: usize) -> Vec<u8> {
    debug_assert!(times > 0 || s.is_empty());
    s.repeat(times)
}
