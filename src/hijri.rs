//! Hijri date value type and the mapping between Hijri months and lunation
//! indices.

use std::fmt;

use chrono::NaiveDate;

use crate::convert;
use crate::error::{ConversionError, FormatError};
use crate::options::{CalendarSystem, FormatOptions};
use crate::value::GregorianInput;

/// Lunation index of 1 Muharram 1 AH, counted from the new moon of
/// 6 January 2000 (lunation 0).
pub const K_EPOCH: i64 = -17037;

/// A day in the Hijri calendar.
///
/// Plain value type: constructing one does not validate it. Use
/// [`HijriDate::try_new`] or [`crate::is_valid`] to check it against a
/// calendar system. Ordering is chronological within one system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Creates a date that is valid in `system`.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidHijriDate` if the date does not exist in `system`.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        system: CalendarSystem,
    ) -> Result<Self, ConversionError> {
        if convert::is_valid(year, month, day, system) {
            Ok(Self::new(year, month, day))
        } else {
            Err(ConversionError::InvalidHijriDate { year, month, day })
        }
    }

    pub fn is_valid(&self, system: CalendarSystem) -> bool {
        convert::is_valid(self.year, self.month, self.day, system)
    }

    /// The Gregorian day this date falls on in `system`.
    pub fn to_gregorian(&self, system: CalendarSystem) -> Result<NaiveDate, ConversionError> {
        convert::to_gregorian(self.year, self.month, self.day, system)
    }

    /// The Hijri date of a Gregorian day, or `None` if `system` cannot represent it.
    pub fn from_gregorian<'a>(
        input: impl Into<GregorianInput<'a>>,
        system: CalendarSystem,
    ) -> Result<Option<Self>, ConversionError> {
        convert::to_hijri(input, system)
    }

    /// Formats this date with a token pattern such as `"iD iMMMM iYYYY"`.
    pub fn format(&self, pattern: &str, opts: &FormatOptions) -> Result<String, FormatError> {
        crate::format(self, pattern, opts)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Lunation index of the first month of Hijri (`year`, `month`).
pub fn lunation_index(year: i32, month: u32) -> i64 {
    K_EPOCH + (i64::from(year) - 1) * 12 + (i64::from(month) - 1)
}

/// Hijri (year, month) that begins with lunation `k`.
///
/// Uses floor division so lunations before the epoch land in year 0 or below
/// with the month still in 1..=12.
pub fn month_of_lunation(k: i64) -> (i64, u32) {
    let months = k - K_EPOCH;
    let month = months.rem_euclid(12) + 1;
    (months.div_euclid(12) + 1, month as u32)
}
