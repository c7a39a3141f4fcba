//! Gregorian inputs accepted by the conversion entry points.
//!
//! Every input is reduced to a UTC calendar day before conversion. Instants
//! are moved to UTC first and their time-of-day is dropped; naive date-times
//! are taken to be UTC already. No local time zone is ever consulted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::ConversionError;

/// A Gregorian date or instant to convert to the Hijri calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum GregorianInput<'a> {
    /// A calendar day
    Date(NaiveDate),
    /// A wall-clock date-time, read as UTC
    DateTime(NaiveDateTime),
    /// An instant
    Instant(DateTime<Utc>),
    /// Year, month (1-12) and day (1-31), not yet validated
    Ymd(i32, u32, u32),
    /// ISO 8601 date (`2023-03-23`), date-time or RFC 3339 timestamp
    Text(&'a str),
}

impl GregorianInput<'_> {
    /// Resolves this input to its UTC calendar day.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidGregorianDate` for a day that does not
    /// exist or text that is not a recognised date.
    pub fn to_utc_date(&self) -> Result<NaiveDate, ConversionError> {
        match *self {
            GregorianInput::Date(date) => Ok(date),
            GregorianInput::DateTime(datetime) => Ok(datetime.date()),
            GregorianInput::Instant(instant) => Ok(instant.date_naive()),
            GregorianInput::Ymd(year, month, day) => NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| {
                    ConversionError::InvalidGregorianDate(format!(
                        "{year:04}-{month:02}-{day:02}"
                    ))
                }),
            GregorianInput::Text(text) => parse_text(text),
        }
    }
}

fn parse_text(text: &str) -> Result<NaiveDate, ConversionError> {
    let trimmed = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc).date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }

    Err(ConversionError::InvalidGregorianDate(text.to_string()))
}

impl<'a> From<NaiveDate> for GregorianInput<'a> {
    fn from(date: NaiveDate) -> Self {
        GregorianInput::Date(date)
    }
}

impl<'a> From<NaiveDateTime> for GregorianInput<'a> {
    fn from(datetime: NaiveDateTime) -> Self {
        GregorianInput::DateTime(datetime)
    }
}

impl<'a, Tz: TimeZone> From<DateTime<Tz>> for GregorianInput<'a> {
    fn from(instant: DateTime<Tz>) -> Self {
        GregorianInput::Instant(instant.with_timezone(&Utc))
    }
}

impl<'a> From<(i32, u32, u32)> for GregorianInput<'a> {
    fn from((year, month, day): (i32, u32, u32)) -> Self {
        GregorianInput::Ymd(year, month, day)
    }
}

impl<'a> From<&'a str> for GregorianInput<'a> {
    fn from(text: &'a str) -> Self {
        GregorianInput::Text(text)
    }
}
