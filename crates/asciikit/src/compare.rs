//! Length, equality, and ordering.
//!
//! Case-insensitive variants fold only the ASCII letters `A-Z`/`a-z`; every
//! other byte is compared as-is. The natural-order comparisons treat runs of
//! decimal digits as numeric magnitudes, so `"a20"` sorts before `"a100"`.

use core::cmp::Ordering;

#[must_use]
pub fn length(s: &[u8]) -> usize {
    s.len()
}

#[must_use]
pub fn is_empty(s: &[u8]) -> bool {
    s.is_empty()
}

#[must_use]
pub fn equals(a: &[u8], b: &[u8]) -> bool {
    a == b
}

#[must_use]
pub fn equals_ci(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.eq_ignore_ascii_case(y))
}

/// Lexicographic byte order.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Lexicographic byte order with ASCII letters case-folded.
#[must_use]
pub fn compare_ci(a: &[u8], b: &[u8]) -> Ordering {
    let fold = |x: &u8| x.to_ascii_lowercase();
    a.iter().map(fold).cmp(b.iter().map(fold))
}

/// Natural order: digit runs compare as numeric magnitudes, everything else
/// byte-wise.
#[must_use]
pub fn compare_nat(a: &[u8], b: &[u8]) -> Ordering {
    natural(a, b, false)
}

/// Natural order with ASCII letters case-folded.
#[must_use]
pub fn compare_nat_ci(a: &[u8], b: &[u8]) -> Ordering {
    natural(a, b, true)
}

fn natural(a: &[u8], b: &[u8], ci: bool) -> Ordering {
    let fold = |x: u8| if ci { x.to_ascii_lowercase() } else { x };
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let run_a = digit_run(a, &mut i);
            let run_b = digit_run(b, &mut j);
            match magnitude(run_a, run_b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        } else {
            match fold(a[i]).cmp(&fold(b[j])) {
                Ordering::Equal => {
                    i += 1;
                    j += 1;
                }
                unequal => return unequal,
            }
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

fn digit_run<'a>(s: &'a [u8], idx: &mut usize) -> &'a [u8] {
    let start = *idx;
    while *idx < s.len() && s[*idx].is_ascii_digit() {
        *idx += 1;
    }
    &s[start..*idx]
}

// Numeric comparison of two digit runs: strip leading zeros, then a longer
// run is the larger magnitude and equal lengths compare digit-wise.
fn magnitude(a: &[u8], b: &[u8]) -> Ordering {
    let a = &a[a.iter().position(|&d| d != b'0').unwrap_or(a.len())..];
    let b = &b[b.iter().position(|&d| d != b'0').unwrap_or(b.len())..];
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
