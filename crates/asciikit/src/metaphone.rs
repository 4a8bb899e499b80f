//! First-generation Metaphone phonetic encoding.
//!
//! Produces the uppercase consonant-skeleton key of Lawrence Philips'
//! original 1990 algorithm. Double Metaphone is a different algorithm with
//! different keys and is intentionally not implemented here.
//!
//! Rule summary:
//! - non-alphabetic bytes carry no phonetic weight and are ignored;
//! - initial `AE`, `GN`, `KN`, `PN`, `WR` drop their first letter, initial
//!   `X` becomes `S`, initial `WH` becomes `W`;
//! - vowels survive only as the very first letter;
//! - adjacent duplicate letters collapse, except `C`;
//! - consonants map through the context table below (`CIA`/`CH` to `X`,
//!   soft `C` to `S`, `DG[EIY]` to `J`, `TH` to `0`, `PH` to `F`, `X` to
//!   `KS`, silent `GH`/`GN`/`KN`-style letters dropped, and so on).

use alloc::vec::Vec;

fn is_vowel(b: u8) -> bool {
    matches!(b, b'A' | b'E' | b'I' | b'O' | b'U')
}

// Letters that soften a preceding C or G.
fn is_soft(b: u8) -> bool {
    matches!(b, b'E' | b'I' | b'Y')
}

/// Returns the Metaphone key "heard" from `s`.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn metaphone_key(s: &[u8]) -> Vec<u8> {
    let w: Vec<u8> = s
        .iter()
        .filter(|b| b.is_ascii_alphabetic())
        .map(u8::to_ascii_uppercase)
        .collect();
    if w.is_empty() {
        return Vec::new();
    }

    let mut key = Vec::with_capacity(w.len());
    let mut i = 0;

    // Initial-letter exceptions.
    match (w[0], w.get(1).copied()) {
        (b'A', Some(b'E')) => {
            key.push(b'E');
            i = 2;
        }
        (b'G' | b'K' | b'P', Some(b'N')) | (b'W', Some(b'R')) => i = 1,
        (b'W', Some(b'H')) => {
            key.push(b'W');
            i = 2;
        }
        (b'X', _) => {
            key.push(b'S');
            i = 1;
        }
        _ => {}
    }
    let start = i;

    let mut skip = 0usize;
    while i < w.len() {
        if skip > 0 {
            skip -= 1;
            i += 1;
            continue;
        }
        let c = w[i];
        let prev = i.checked_sub(1).map(|p| w[p]);
        let next = w.get(i + 1).copied();
        let next2 = w.get(i + 2).copied();

        if i > start && prev == Some(c) && c != b'C' {
            i += 1;
            continue;
        }

        match c {
            b'A' | b'E' | b'I' | b'O' | b'U' => {
                if i == 0 {
                    key.push(c);
                }
            }
            b'B' => {
                // Silent when the word ends in MB.
                if !(i + 1 == w.len() && prev == Some(b'M')) {
                    key.push(b'B');
                }
            }
            b'C' => {
                if next == Some(b'I') && next2 == Some(b'A') {
                    key.push(b'X');
                } else if next.is_some_and(is_soft) {
                    // SC[IEY] is silent, plain soft C is S.
                    if prev != Some(b'S') {
                        key.push(b'S');
                    }
                } else if next == Some(b'H') {
                    key.push(b'X');
                    skip = 1;
                } else {
                    key.push(b'K');
                }
            }
            b'D' => {
                if next == Some(b'G') && next2.is_some_and(is_soft) {
                    key.push(b'J');
                    skip = 1;
                } else {
                    key.push(b'T');
                }
            }
            b'F' => key.push(b'F'),
            b'G' => {
                if next == Some(b'H') {
                    // GH sounds only before a vowel ("ghost"); "night",
                    // "tough", and friends keep it silent.
                    if next2.is_some_and(is_vowel) {
                        key.push(b'K');
                    }
                    skip = 1;
                } else if next == Some(b'N')
                    && (i + 2 == w.len()
                        || (next2 == Some(b'E') && w.get(i + 3) == Some(&b'D') && i + 4 == w.len()))
                {
                    // Silent in terminal -GN and -GNED.
                } else if next.is_some_and(is_soft) {
                    key.push(b'J');
                } else {
                    key.push(b'K');
                }
            }
            b'H' => {
                // Audible only when it can start a syllable.
                if !(prev.is_some_and(is_vowel) && !next.is_some_and(is_vowel)) {
                    key.push(b'H');
                }
            }
            b'J' => key.push(b'J'),
            b'K' => {
                if prev != Some(b'C') {
                    key.push(b'K');
                }
            }
            b'L' => key.push(b'L'),
            b'M' => key.push(b'M'),
            b'N' => key.push(b'N'),
            b'P' => {
                if next == Some(b'H') {
                    key.push(b'F');
                    skip = 1;
                } else {
                    key.push(b'P');
                }
            }
            b'Q' => key.push(b'K'),
            b'R' => key.push(b'R'),
            b'S' => {
                if next == Some(b'H') {
                    key.push(b'X');
                    skip = 1;
                } else if next == Some(b'I') && matches!(next2, Some(b'O' | b'A')) {
                    key.push(b'X');
                } else {
                    key.push(b'S');
                }
            }
            b'T' => {
                if next == Some(b'I') && matches!(next2, Some(b'O' | b'A')) {
                    key.push(b'X');
                } else if next == Some(b'H') {
                    key.push(b'0');
                    skip = 1;
                } else if next == Some(b'C') && next2 == Some(b'H') {
                    // Silent in -TCH-.
                } else {
                    key.push(b'T');
                }
            }
            b'V' => key.push(b'F'),
            b'W' => {
                if next.is_some_and(is_vowel) {
                    key.push(b'W');
                }
            }
            b'X' => key.extend_from_slice(b"KS"),
            b'Y' => {
                if next.is_some_and(is_vowel) {
                    key.push(b'Y');
                }
            }
            b'Z' => key.push(b'S'),
            _ => {}
        }
        i += 1;
    }
    key
}
