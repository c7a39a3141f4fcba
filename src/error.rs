//! Error types for conversion, pattern parsing and formatting.

use thiserror::Error;

/// Errors raised by the conversion entry points for malformed input.
///
/// A well-formed query whose answer lies outside the supported range is not
/// an error; those operations return `Ok(None)` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid Hijri date: {year}-{month:02}-{day:02}")]
    InvalidHijriDate { year: i32, month: u32, day: u32 },

    #[error("invalid Gregorian date: {0}")]
    InvalidGregorianDate(String),
}

/// Errors that can occur when parsing a format pattern or a calendar name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("unknown calendar system '{0}' (expected 'uaq' or 'fcna')")]
    UnknownCalendar(String),
}

/// Errors that can occur when formatting a Hijri date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
