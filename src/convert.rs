//! Conversion entry points, dispatching on [`CalendarSystem`].

use chrono::NaiveDate;

use crate::error::ConversionError;
use crate::fcna;
use crate::hijri::HijriDate;
use crate::options::CalendarSystem;
use crate::uaq;
use crate::value::GregorianInput;

/// Converts a Hijri date to its Gregorian day.
///
/// # Errors
/// Returns `ConversionError::InvalidHijriDate` if the date does not exist in
/// `system` (see [`is_valid`]).
///
/// # Examples
/// ```
/// use hijri_calendar::{to_gregorian, CalendarSystem};
/// use chrono::NaiveDate;
///
/// let date = to_gregorian(1444, 9, 1, CalendarSystem::UmmAlQura).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2023, 3, 23).unwrap());
/// assert!(to_gregorian(1444, 13, 1, CalendarSystem::UmmAlQura).is_err());
/// ```
pub fn to_gregorian(
    year: i32,
    month: u32,
    day: u32,
    system: CalendarSystem,
) -> Result<NaiveDate, ConversionError> {
    let converted = match system {
        CalendarSystem::UmmAlQura if uaq::is_valid(year, month, day) => {
            uaq::to_gregorian(year, month, day)
        }
        CalendarSystem::UmmAlQura => None,
        CalendarSystem::Fcna => fcna::to_gregorian(year, month, day),
    };
    converted.ok_or(ConversionError::InvalidHijriDate { year, month, day })
}

/// Converts a Gregorian day to a Hijri date.
///
/// Returns `Ok(None)` when `system` has no date for the day: before
/// 1 Muharram 1 AH for FCNA, or outside 1318-1500 AH for Umm al-Qura.
///
/// # Errors
/// Returns `ConversionError::InvalidGregorianDate` for a malformed input.
///
/// # Examples
/// ```
/// use hijri_calendar::{to_hijri, CalendarSystem, HijriDate};
///
/// let hijri = to_hijri("2025-03-01", CalendarSystem::Fcna).unwrap();
/// assert_eq!(hijri, Some(HijriDate::new(1446, 9, 1)));
/// assert_eq!(to_hijri((1800, 1, 1), CalendarSystem::UmmAlQura).unwrap(), None);
/// ```
pub fn to_hijri<'a>(
    input: impl Into<GregorianInput<'a>>,
    system: CalendarSystem,
) -> Result<Option<HijriDate>, ConversionError> {
    let date = input.into().to_utc_date()?;
    Ok(match system {
        CalendarSystem::UmmAlQura => uaq::to_hijri(date),
        CalendarSystem::Fcna => fcna::to_hijri(date),
    })
}

/// Whether Hijri `year`-`month`-`day` exists in `system`.
pub fn is_valid(year: i32, month: u32, day: u32, system: CalendarSystem) -> bool {
    match system {
        CalendarSystem::UmmAlQura => uaq::is_valid(year, month, day),
        CalendarSystem::Fcna => fcna::is_valid(year, month, day),
    }
}

/// Number of days (29 or 30) in Hijri `year`-`month`, or `None` if `system`
/// has no such month.
pub fn days_in_month(year: i32, month: u32, system: CalendarSystem) -> Option<u32> {
    match system {
        CalendarSystem::UmmAlQura => uaq::days_in_month(year, month),
        CalendarSystem::Fcna => fcna::days_in_month(year, month),
    }
}
