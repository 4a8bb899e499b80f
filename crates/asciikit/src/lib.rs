//! Pure, stateless operations over ASCII byte-strings.
//!
//! An ASCII string here is a raw byte sequence whose bytes, when valid, stay
//! in the range `0x00..=0x7F`. Operations never enforce that range except
//! [`convert::is_valid`] and [`convert::sanitize`]; everything else treats the
//! input as opaque bytes so that strings carrying stray high bytes can still
//! be searched, trimmed, and sanitized.
//!
//! The crate is a namespace of free functions grouped by concern: validation
//! and lexical conversion, ordering and distance metrics, case transforms,
//! searching, splitting, trimming, padding and substring editing, plus a few
//! odds and ends (Fisher–Yates shuffling, word wrapping, big-numeral radix
//! conversion). Every function is referentially transparent; the only
//! collaborator state is the caller-supplied [`RandomSource`] used by
//! [`shuffle::shuffle`].
//!
//! Locale-aware rendering of numbers, percentages, currency, and date/time
//! values is delegated to an external engine behind the [`LocaleFormatter`]
//! trait (enabled by the `locale` feature); this crate ships no locale data.
#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod casing;
pub mod compare;
pub mod convert;
pub mod distance;
pub mod edit;
pub mod metaphone;
mod pattern;
pub mod radix;
pub mod search;
pub mod shuffle;
pub mod split;
pub mod trim;
pub mod wrap;

#[cfg(feature = "locale")]
pub mod locale;

#[cfg(test)]
mod tests;

pub use pattern::{Affixes, Delimiters};
pub use shuffle::RandomSource;
pub use trim::{NEWLINE, NEWLINE_CR, NEWLINE_CRLF, NEWLINE_LF};

#[cfg(feature = "locale")]
pub use locale::{DateStyle, FormatError, LocaleFormatter, TimeStyle};
