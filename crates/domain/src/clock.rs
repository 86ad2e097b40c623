//! Date/time literal parsing and formatting
//!
//! The organizer accepts exactly two textual forms at its boundary:
//! `YYYY-MM-DD HH:MM` for points in time and `YYYY-MM-DD` for calendar days.
//! Values are naive (no timezone) and compare chronologically.

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::DomainError;

/// `strftime` pattern for date-time literals
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// `strftime` pattern for date-only literals
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_TIME_SHAPE: &str = "YYYY-MM-DD HH:MM";
const DATE_SHAPE: &str = "YYYY-MM-DD";

/// Parse a `YYYY-MM-DD HH:MM` literal
///
/// The literal must be canonical: formatting the parsed value has to give
/// back the input byte for byte, so `2025-2-5 9:00` is rejected.
///
/// # Errors
///
/// Returns [`DomainError::ParseError`] when the literal does not match the
/// pattern or names an impossible date or time.
pub fn parse_date_time(input: &str) -> Result<NaiveDateTime, DomainError> {
    NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT)
        .ok()
        .filter(|value| format_date_time(*value) == input)
        .ok_or_else(|| parse_error(input, DATE_TIME_SHAPE))
}

/// Parse a `YYYY-MM-DD` literal
///
/// # Errors
///
/// Returns [`DomainError::ParseError`] when the literal is not a canonical
/// date or names an impossible calendar day.
pub fn parse_date(input: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .ok()
        .filter(|value| format_date(*value) == input)
        .ok_or_else(|| parse_error(input, DATE_SHAPE))
}

/// Format a date-time as `YYYY-MM-DD HH:MM`
#[must_use]
pub fn format_date_time(value: NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Format a date as `YYYY-MM-DD`
#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Format only the `HH:MM` part of a date-time
#[must_use]
pub fn format_time(value: NaiveDateTime) -> String {
    value.format("%H:%M").to_string()
}

fn parse_error(input: &str, expected: &'static str) -> DomainError {
    DomainError::ParseError {
        input: input.to_string(),
        expected,
    }
}
