use alloc::{format, string::String, string::ToString};

use chrono::NaiveDate;

use crate::locale::{DateStyle, FormatError, LocaleFormatter, TimeStyle};

// A minimal engine covering a single locale, enough to exercise the
// contract from the consumer side.
struct EnUsOnly;

impl EnUsOnly {
    fn check(locale: &str) -> Result<(), FormatError> {
        if locale == "en-US" {
            Ok(())
        } else {
            Err(FormatError::UnknownLocale(locale.to_string()))
        }
    }
}

impl LocaleFormatter for EnUsOnly {
    fn number(&self, locale: &str, value: f64) -> Result<String, FormatError> {
        Self::check(locale)?;
        Ok(format!("{value}"))
    }

    fn number_without_grouping(&self, locale: &str, value: f64) -> Result<String, FormatError> {
        self.number(locale, value)
    }

    fn number_scientific(&self, locale: &str, value: f64) -> Result<String, FormatError> {
        Self::check(locale)?;
        Ok(format!("{value:E}"))
    }

    fn number_ordinal(&self, locale: &str, value: i64) -> Result<String, FormatError> {
        Self::check(locale)?;
        let suffix = match (value % 10, value % 100) {
            (1, n) if n != 11 => "st",
            (2, n) if n != 12 => "nd",
            (3, n) if n != 13 => "rd",
            _ => "th",
        };
        Ok(format!("{value}{suffix}"))
    }

    fn number_spell_out(&self, locale: &str, value: f64) -> Result<String, FormatError> {
        Self::check(locale)?;
        Err(FormatError::Engine(format!("no spell-out table for {value}")))
    }

    fn percent(&self, locale: &str, value: f64) -> Result<String, FormatError> {
        Self::check(locale)?;
        Ok(format!("{}%", value * 100.0))
    }

    fn currency(
        &self,
        locale: &str,
        value: f64,
        currency: Option<&str>,
    ) -> Result<String, FormatError> {
        Self::check(locale)?;
        match currency.unwrap_or("USD") {
            "USD" => Ok(format!("${value:.2}")),
            other => Err(FormatError::UnknownCurrency(other.to_string())),
        }
    }

    fn datetime_with_styles(
        &self,
        locale: &str,
        time: chrono::NaiveDateTime,
        _zone: &str,
        date_style: DateStyle,
        time_style: TimeStyle,
    ) -> Result<String, FormatError> {
        Self::check(locale)?;
        Ok(match (date_style, time_style) {
            (DateStyle::None, _) => format!("{}", time.time()),
            (_, TimeStyle::None) => format!("{}", time.date()),
            _ => format!("{time}"),
        })
    }

    fn datetime_with_pattern(
        &self,
        locale: &str,
        time: chrono::NaiveDateTime,
        _zone: &str,
        pattern: &str,
    ) -> Result<String, FormatError> {
        Self::check(locale)?;
        match pattern {
            "yyyy" => Ok(format!("{}", time.date().format("%Y"))),
            other => Err(FormatError::UnsupportedPattern(other.to_string())),
        }
    }
}

fn sample_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(13, 30, 0)
        .unwrap()
}

#[test]
fn engines_are_usable_through_a_trait_object() {
    let engine: &dyn LocaleFormatter = &EnUsOnly;

    assert_eq!(engine.number("en-US", 1234.5).unwrap(), "1234.5");
    assert_eq!(engine.number_ordinal("en-US", 22).unwrap(), "22nd");
    assert_eq!(engine.number_ordinal("en-US", 11).unwrap(), "11th");
    assert_eq!(engine.percent("en-US", 0.25).unwrap(), "25%");
    assert_eq!(engine.currency("en-US", 9.5, None).unwrap(), "$9.50");
    assert_eq!(
        engine
            .datetime_with_pattern("en-US", sample_time(), "America/New_York", "yyyy")
            .unwrap(),
        "2024"
    );
}

#[test]
fn errors_carry_the_offending_input() {
    let engine = EnUsOnly;

    assert_eq!(
        engine.number("xx-XX", 1.0),
        Err(FormatError::UnknownLocale("xx-XX".to_string()))
    );
    assert_eq!(
        engine.currency("en-US", 1.0, Some("ZZZ")),
        Err(FormatError::UnknownCurrency("ZZZ".to_string()))
    );
    assert_eq!(
        engine.datetime_with_pattern("en-US", sample_time(), "UTC", "QQQQ"),
        Err(FormatError::UnsupportedPattern("QQQQ".to_string()))
    );
}

#[test]
fn error_display_is_descriptive() {
    let message = format!("{}", FormatError::UnknownLocale("tlh".to_string()));
    assert_eq!(message, "unknown locale identifier 'tlh'");
    let message = format!("{}", FormatError::UnsupportedPattern("GGGGG".to_string()));
    assert_eq!(message, "unsupported date/time pattern 'GGGGG'");
}

#[test]
fn style_axes_are_independent() {
    let engine = EnUsOnly;
    let date_only = engine
        .datetime_with_styles("en-US", sample_time(), "UTC", DateStyle::Medium, TimeStyle::None)
        .unwrap();
    let time_only = engine
        .datetime_with_styles("en-US", sample_time(), "UTC", DateStyle::None, TimeStyle::Medium)
        .unwrap();
    assert_ne!(date_only, time_only);
    assert!(date_only.contains("2024"));
    assert!(time_only.contains("13:30"));
}
