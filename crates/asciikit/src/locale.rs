//! Contract for the external locale-aware formatting engine.
//!
//! Rendering numbers, percentages, currency amounts, and date/time values
//! for a locale requires CLDR-scale data that this crate deliberately does
//! not carry. Instead, embedders plug an ICU-style engine in behind
//! [`LocaleFormatter`]; this module pins down the call surface and the
//! error kinds such an engine must provide and nothing more.
//!
//! Locale identifiers are BCP-47 strings (`"en-US"`, `"uk-UA"`). Date/time
//! patterns follow the Unicode date-pattern symbol table (`"yyyy-MM-dd"`).

use alloc::string::String;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Failures reported by a formatting engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown locale identifier '{0}'")]
    UnknownLocale(String),
    #[error("unknown currency code '{0}'")]
    UnknownCurrency(String),
    #[error("unsupported date/time pattern '{0}'")]
    UnsupportedPattern(String),
    #[error("formatting engine failure: {0}")]
    Engine(String),
}

/// Date rendering styles, in increasing verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    None,
    Short,
    Medium,
    Long,
    Full,
}

/// Time rendering styles, in increasing verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeStyle {
    None,
    Short,
    Medium,
    Long,
    Full,
}

/// A locale-aware formatting engine.
///
/// Every method takes the target locale first; temporal methods also take
/// an IANA time zone name (`"Europe/Kyiv"`). The trait is object-safe
/// so an engine can be handed around as `&dyn LocaleFormatter`.
pub trait LocaleFormatter {
    /// Formats a number with the locale's grouping separators.
    fn number(&self, locale: &str, value: f64) -> Result<String, FormatError>;

    /// Formats a number without grouping separators.
    fn number_without_grouping(&self, locale: &str, value: f64) -> Result<String, FormatError>;

    /// Formats a number in the locale's scientific notation.
    fn number_scientific(&self, locale: &str, value: f64) -> Result<String, FormatError>;

    /// Formats an integer as an ordinal ("1st", "2nd").
    fn number_ordinal(&self, locale: &str, value: i64) -> Result<String, FormatError>;

    /// Spells a number out in words ("forty-two").
    fn number_spell_out(&self, locale: &str, value: f64) -> Result<String, FormatError>;

    /// Formats a fraction as a percentage (`0.25` becomes "25%").
    fn percent(&self, locale: &str, value: f64) -> Result<String, FormatError>;

    /// Formats an amount of currency; `currency` is an ISO 4217 code, with
    /// `None` meaning the locale's default currency.
    fn currency(
        &self,
        locale: &str,
        value: f64,
        currency: Option<&str>,
    ) -> Result<String, FormatError>;

    /// Formats a date/time with per-component styles.
    fn datetime_with_styles(
        &self,
        locale: &str,
        time: NaiveDateTime,
        zone: &str,
        date_style: DateStyle,
        time_style: TimeStyle,
    ) -> Result<String, FormatError>;

    /// Formats a date/time with an explicit Unicode date pattern.
    fn datetime_with_pattern(
        &self,
        locale: &str,
        time: NaiveDateTime,
        zone: &str,
        pattern: &str,
    ) -> Result<String, FormatError>;
}
