//! Validation and lexical conversion.
//!
//! The numeric conversions here deliberately parse permissively: they take
//! the longest valid numeral prefix and fall back to zero when nothing
//! parses. Nothing in this module returns an error; malformed input is a
//! defined fallback, not a failure. Contract violations (out-of-range
//! character codes, bases outside `[2, 36]`, multi-byte input where a single
//! character is required) are debug assertions.

use alloc::{string::ToString, vec::Vec};

use crate::compare;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Returns `true` iff every byte of `s` is a valid ASCII code (`<= 0x7F`).
#[must_use]
pub fn is_valid(s: &[u8]) -> bool {
    s.iter().all(|&b| b <= 0x7F)
}

/// Replaces every byte above `0x7F` with `?`, leaving all other bytes
/// untouched.
#[must_use]
pub fn sanitize(s: &[u8]) -> Vec<u8> {
    s.iter().map(|&b| if b > 0x7F { b'?' } else { b }).collect()
}

#[must_use]
pub fn from_bool_10(value: bool) -> &'static [u8] {
    if value { b"1" } else { b"0" }
}

#[must_use]
pub fn from_bool_tf(value: bool) -> &'static [u8] {
    if value { b"true" } else { b"false" }
}

#[must_use]
pub fn from_bool_yn(value: bool) -> &'static [u8] {
    if value { b"yes" } else { b"no" }
}

#[must_use]
pub fn from_bool_oo(value: bool) -> &'static [u8] {
    if value { b"on" } else { b"off" }
}

#[must_use]
pub fn from_int(value: i64) -> Vec<u8> {
    value.to_string().into_bytes()
}

#[must_use]
pub fn from_float(value: f64) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Interprets `s` as a boolean: `"1"` (case-sensitively) or `"true"`,
/// `"yes"`, `"on"` (case-insensitively) are `true`; anything else is
/// `false`. Never errors.
#[must_use]
pub fn to_bool(s: &[u8]) -> bool {
    compare::equals(s, b"1")
        || compare::equals_ci(s, b"true")
        || compare::equals_ci(s, b"yes")
        || compare::equals_ci(s, b"on")
}

#[must_use]
pub fn to_bool_from_10(s: &[u8]) -> bool {
    compare::equals(s, b"1")
}

#[must_use]
pub fn to_bool_from_tf(s: &[u8]) -> bool {
    compare::equals_ci(s, b"true")
}

#[must_use]
pub fn to_bool_from_yn(s: &[u8]) -> bool {
    compare::equals_ci(s, b"yes")
}

#[must_use]
pub fn to_bool_from_oo(s: &[u8]) -> bool {
    compare::equals_ci(s, b"on")
}

/// Parses the longest valid decimal integer prefix of `s`.
///
/// Leading ASCII whitespace and a sign are accepted; parsing stops at the
/// first invalid byte. Total failure yields `0`; out-of-range magnitudes
/// saturate at `i64::MIN`/`i64::MAX`.
#[must_use]
pub fn to_int(s: &[u8]) -> i64 {
    int_prefix(s, 10, false)
}

/// Like [`to_int`] with base 16; a `0x`/`0X` prefix is accepted.
#[must_use]
pub fn to_int_from_hex(s: &[u8]) -> i64 {
    int_prefix(s, 16, true)
}

/// Like [`to_int`] with an arbitrary base in `[2, 36]` (contract); for base
/// 16 a `0x`/`0X` prefix is accepted.
#[must_use]
pub fn to_int_from_base(s: &[u8], base: u32) -> i64 {
    debug_assert!((2..=36).contains(&base));
    int_prefix(s, base, base == 16)
}

/// Parses the longest valid floating-point prefix of `s`, scientific
/// notation included. Total failure yields `0.0`.
#[must_use]
pub fn to_float(s: &[u8]) -> f64 {
    let mut i = 0;
    while i < s.len() && is_lexical_space(s[i]) {
        i += 1;
    }
    let start = i;
    if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
        i += 1;
    }
    let mut mantissa_digits = 0;
    while i < s.len() && s[i].is_ascii_digit() {
        i += 1;
        mantissa_digits += 1;
    }
    if i < s.len() && s[i] == b'.' {
        i += 1;
        while i < s.len() && s[i].is_ascii_digit() {
            i += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }
    // Consume an exponent only when at least one digit follows it.
    if i < s.len() && (s[i] == b'e' || s[i] == b'E') {
        let mut j = i + 1;
        if j < s.len() && (s[j] == b'+' || s[j] == b'-') {
            j += 1;
        }
        if j < s.len() && s[j].is_ascii_digit() {
            while j < s.len() && s[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }
    core::str::from_utf8(&s[start..i])
        .ok()
        .and_then(|text| text.parse().ok())
        .unwrap_or(0.0)
}

/// Returns the single-character string for an ASCII code; contract:
/// `code <= 0x7F`.
#[must_use]
pub fn from_char_code(code: u8) -> Vec<u8> {
    debug_assert!(code <= 0x7F);
    alloc::vec![code]
}

/// Returns the code of a single-character string; contract: `len == 1`.
#[must_use]
pub fn to_char_code(char_str: &[u8]) -> u8 {
    debug_assert!(char_str.len() == 1);
    char_str[0]
}

/// Returns the code of a single-character string as exactly two uppercase
/// hex digits.
#[must_use]
pub fn to_char_code_hex(char_str: &[u8]) -> Vec<u8> {
    let code = to_char_code(char_str);
    alloc::vec![
        HEX_UPPER[usize::from(code >> 4)],
        HEX_UPPER[usize::from(code & 0x0F)]
    ]
}

/// Expands every byte into the four characters `\xHH` (uppercase hex,
/// zero-padded), concatenated without separators.
#[must_use]
pub fn to_esc_string(s: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() * 4);
    for &b in s {
        out.extend_from_slice(b"\\x");
        out.push(HEX_UPPER[usize::from(b >> 4)]);
        out.push(HEX_UPPER[usize::from(b & 0x0F)]);
    }
    out
}

// Lexical whitespace skipped ahead of a numeral: space plus HT..CR.
fn is_lexical_space(b: u8) -> bool {
    b == b' ' || (0x09..=0x0D).contains(&b)
}

fn digit_value(b: u8, base: u32) -> Option<u32> {
    let v = match b {
        b'0'..=b'9' => u32::from(b - b'0'),
        b'a'..=b'z' => u32::from(b - b'a') + 10,
        b'A'..=b'Z' => u32::from(b - b'A') + 10,
        _ => return None,
    };
    (v < base).then_some(v)
}

fn int_prefix(s: &[u8], base: u32, allow_0x: bool) -> i64 {
    let mut i = 0;
    while i < s.len() && is_lexical_space(s[i]) {
        i += 1;
    }
    let mut negative = false;
    if i < s.len() && (s[i] == b'+' || s[i] == b'-') {
        negative = s[i] == b'-';
        i += 1;
    }
    // A "0x" prefix counts only when a digit of the base follows it;
    // otherwise the leading zero is the parsed numeral.
    if allow_0x
        && s.get(i) == Some(&b'0')
        && matches!(s.get(i + 1), Some(&b'x' | &b'X'))
        && s.get(i + 2).is_some_and(|&b| digit_value(b, base).is_some())
    {
        i += 2;
    }
    let mut value: i64 = 0;
    while i < s.len() {
        let Some(d) = digit_value(s[i], base) else {
            break;
        };
        let next = value
            .checked_mul(i64::from(base))
            .and_then(|v| v.checked_add(i64::from(d)));
        match next {
            Some(v) => value = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
        i += 1;
    }
    if negative { -value } else { value }
}
