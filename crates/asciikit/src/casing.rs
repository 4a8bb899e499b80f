//! ASCII-only case and shape transforms. Bytes outside `A-Z`/`a-z` pass
//! through unchanged.

use alloc::vec::Vec;

#[must_use]
pub fn to_lowercase(s: &[u8]) -> Vec<u8> {
    s.to_ascii_lowercase()
}

#[must_use]
pub fn to_uppercase(s: &[u8]) -> Vec<u8> {
    s.to_ascii_uppercase()
}

/// Uppercases only the first byte, if it is a lowercase ASCII letter.
#[must_use]
pub fn to_uppercase_first(s: &[u8]) -> Vec<u8> {
    let mut out = s.to_vec();
    if let Some(first) = out.first_mut() {
        *first = first.to_ascii_uppercase();
    }
    out
}

/// Uppercases the first letter of every whitespace-delimited word.
#[must_use]
pub fn to_title_case(s: &[u8]) -> Vec<u8> {
    let mut out = s.to_vec();
    let mut at_word_start = true;
    for b in &mut out {
        if is_word_space(*b) {
            at_word_start = true;
        } else {
            if at_word_start {
                *b = b.to_ascii_uppercase();
            }
            at_word_start = false;
        }
    }
    out
}

// Space, HT, LF, VT, FF, CR.
fn is_word_space(b: u8) -> bool {
    b == b' ' || (0x09..=0x0D).contains(&b)
}
