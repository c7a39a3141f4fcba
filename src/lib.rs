//! hijri-calendar - Umm al-Qura and FCNA/ISNA Hijri calendars
//!
//! Converts between Gregorian days and Hijri dates in two systems:
//!
//! - **Umm al-Qura** ([`CalendarSystem::UmmAlQura`], the default): the Saudi
//!   table, covering Hijri years 1318 to 1500.
//! - **FCNA/ISNA** ([`CalendarSystem::Fcna`]): months start the day after a
//!   conjunction that falls before 12:00 UTC, or two days after one at or
//!   after noon. Conjunctions come from the Meeus new-moon series, so any year
//!   from 1 AH is supported.
//!
//! Hijri dates can also be rendered with token patterns (`iD iMMMM iYYYY`).

pub mod ast;
pub mod convert;
pub mod error;
pub mod fcna;
pub mod hijri;
pub mod new_moon;
pub mod options;
pub mod table;
pub mod uaq;
pub mod value;

mod builtin_patterns;
mod cache;
mod formatter;
mod locale;
pub mod parser;

pub use ast::Pattern;
pub use builtin_patterns::{pattern_by_name, PATTERN_NAMES};
pub use convert::{days_in_month, is_valid, to_gregorian, to_hijri};
pub use error::{ConversionError, FormatError, ParseError};
pub use hijri::HijriDate;
pub use locale::{
    Locale, MONTH_NAMES_LONG, MONTH_NAMES_MEDIUM, MONTH_NAMES_SHORT, WEEKDAY_NAMES_LONG,
    WEEKDAY_NAMES_SHORT, WEEKDAY_NUMBERS,
};
pub use options::{CalendarSystem, FormatOptions};
pub use table::{year_table, YearRecord};
pub use value::GregorianInput;

/// Format a Hijri date with a token pattern.
///
/// Parsed patterns are cached, so repeated calls with the same pattern only
/// parse it once.
///
/// # Examples
/// ```
/// use hijri_calendar::{format, FormatOptions, HijriDate};
///
/// let date = HijriDate::new(1444, 9, 1);
/// let text = format(&date, "iEEEE, iD iMMMM iYYYY ioooo", &FormatOptions::default()).unwrap();
/// assert_eq!(text, "Yawm al-Khamis, 1 Ramadan 1444 AH");
/// ```
pub fn format(date: &HijriDate, pattern: &str, opts: &FormatOptions) -> Result<String, FormatError> {
    let parsed = cache::get_or_parse(pattern)?;
    parsed.format(date, opts)
}

/// Format a Hijri date with default options (Umm al-Qura, transliterated names).
pub fn format_default(date: &HijriDate, pattern: &str) -> Result<String, FormatError> {
    format(date, pattern, &FormatOptions::default())
}
