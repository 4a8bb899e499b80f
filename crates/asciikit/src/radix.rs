//! Arbitrary-precision textual radix conversion.
//!
//! These functions convert the numeral text itself, so inputs are not
//! bounded by any machine integer width; a thousand-digit decimal converts
//! as readily as `"255"`. Digits above 9 are the letters `A`-`Z`, accepted
//! in either case on input and always uppercase on output.

use alloc::{vec, vec::Vec};

const DIGITS_UPPER: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Converts a decimal numeral to uppercase hexadecimal. Contract: `number`
/// is a non-empty run of decimal digits.
#[must_use]
pub fn dec_to_hex(number: &[u8]) -> Vec<u8> {
    debug_assert!(!number.is_empty() && number.iter().all(u8::is_ascii_digit));
    convert_digits(number, 10, 16)
}

/// Converts a hexadecimal numeral (optionally `0x`-prefixed) to decimal.
#[must_use]
pub fn hex_to_dec(number: &[u8]) -> Vec<u8> {
    let digits = strip_0x(number);
    debug_assert!(!digits.is_empty() && digits.iter().all(u8::is_ascii_hexdigit));
    convert_digits(digits, 16, 10)
}

/// Converts a numeral between two bases in `[2, 36]` (contract); a `0x`
/// prefix is accepted when `from_base` is 16.
#[must_use]
pub fn number_to_base(number: &[u8], from_base: u32, to_base: u32) -> Vec<u8> {
    debug_assert!((2..=36).contains(&from_base) && (2..=36).contains(&to_base));
    let digits = if from_base == 16 { strip_0x(number) } else { number };
    convert_digits(digits, from_base, to_base)
}

fn strip_0x(number: &[u8]) -> &[u8] {
    if number.len() >= 2 && number[0] == b'0' && matches!(number[1], b'x' | b'X') {
        &number[2..]
    } else {
        number
    }
}

fn digit_value(b: u8, base: u32) -> u32 {
    let v = match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'a'..=b'z' => u32::from(b - b'a') + 10,
        b'A'..=b'Z' => u32::from(b - b'A') + 10,
        _ => 0,
    };
    debug_assert!(v < base, "digit out of range for base");
    v % base
}

// Schoolbook conversion: repeatedly divide the numeral (held as a vector of
// source-base digit values, most significant first) by the target base,
// collecting remainders as output digits, least significant first.
fn convert_digits(number: &[u8], from_base: u32, to_base: u32) -> Vec<u8> {
    let mut current: Vec<u32> = number.iter().map(|&b| digit_value(b, from_base)).collect();
    if current.iter().all(|&d| d == 0) {
        return vec![b'0'];
    }

    let mut out = Vec::new();
    while !current.is_empty() {
        let mut quotient = Vec::with_capacity(current.len());
        let mut remainder: u32 = 0;
        for &digit in &current {
            let acc = remainder * from_base + digit;
            let q = acc / to_base;
            remainder = acc % to_base;
            if !(quotient.is_empty() && q == 0) {
                quotient.push(q);
            }
        }
        out.push(DIGITS_UPPER[remainder as usize]);
        current = quotient;
    }
    out.reverse();
    out
}
