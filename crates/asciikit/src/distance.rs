//! Edit-distance metrics.

use alloc::vec::Vec;

use crate::metaphone;

/// Classic Levenshtein distance: the minimum number of unit-cost insert,
/// delete, and substitute edits turning `a` into `b`.
///
/// Contract: both inputs are at most 255 bytes long.
#[must_use]
pub fn leven_dist(a: &[u8], b: &[u8]) -> usize {
    debug_assert!(a.len() <= 255 && b.len() <= 255);

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row dynamic program over the edit matrix.
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = alloc::vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            let delete = prev[j + 1] + 1;
            let insert = curr[j] + 1;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        core::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Levenshtein distance between the Metaphone keys of two strings.
#[must_use]
pub fn metaphone_dist(a: &[u8], b: &[u8]) -> usize {
    leven_dist(&metaphone::metaphone_key(a), &metaphone::metaphone_key(b))
}
