//! Validation predicates for prompted task fields.
//!
//! A predicate only answers whether raw text is acceptable. Prompts apply it
//! before handing text back, so rejected text never reaches the dispatcher.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::ValidationError;
use crate::domain::task::DATE_FORMAT;

/// A pure check over raw user input.
pub type ValidationPredicate = fn(&str) -> bool;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A.+\z").expect("name pattern compiles"));

static DESCRIPTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A.+(?:\r?\n.+)*\z").expect("description pattern compiles")
});

// Four-digit year, no surrounding whitespace.
static START_DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A\d{1,2}\.\d{1,2}\.\d{4} \d{1,2}:\d{1,2}\z")
        .expect("start date pattern compiles")
});

/// Single non-empty line.
pub fn name_filter(text: &str) -> bool {
    NAME_PATTERN.is_match(text)
}

/// One or more non-empty lines.
pub fn description_filter(text: &str) -> bool {
    DESCRIPTION_PATTERN.is_match(text)
}

/// Positive whole number of days.
pub fn period_filter(text: &str) -> bool {
    parse_period(text).is_ok()
}

/// Date and time in [`DATE_FORMAT`] naming a real calendar moment.
pub fn start_date_filter(text: &str) -> bool {
    match parse_start_date(text) {
        Ok(_) => true,
        Err(_) => false,
    }
}

/// Parses a start date typed by a user.
pub fn parse_start_date(text: &str) -> Result<NaiveDateTime, ValidationError> {
    if !START_DATE_PATTERN.is_match(text) {
        return Err(ValidationError::invalid_format(
            "start_date",
            "expected dd.mm.yyyy hh:mm",
        ));
    }
    NaiveDateTime::parse_from_str(text, DATE_FORMAT).map_err(|e| {
        ValidationError::invalid_format("start_date", format!("expected dd.mm.yyyy hh:mm: {}", e))
    })
}

/// Parses a period typed by a user. Only ASCII digits are accepted.
pub fn parse_period(text: &str) -> Result<u32, ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::empty_field("period"));
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(
            "period",
            "must contain digits only",
        ));
    }
    let period: u32 = text
        .parse()
        .map_err(|_| ValidationError::invalid_format("period", "number is too large"))?;
    if period == 0 {
        return Err(ValidationError::out_of_range(
            "period",
            1,
            i64::from(u32::MAX),
            0,
        ));
    }
    Ok(period)
}
