//! Umm al-Qura year table and the bounded binary search shared by every
//! table lookup.
//!
//! The table ends with a sentinel record (mask `0`) whose Gregorian date is
//! the exclusive upper bound of the covered range. The sentinel takes part in
//! searches so that dates past the last real year resolve to it, but it is
//! never handed out: lookups return `None` instead.

mod data;

use chrono::{Datelike, NaiveDate};

use data::YEAR_TABLE;

/// First Hijri year covered by the table.
pub const FIRST_YEAR: i32 = 1318;

/// Last Hijri year covered by the table.
pub const LAST_YEAR: i32 = 1500;

const MONTHS_PER_YEAR: u32 = 12;

/// One Hijri year of the Umm al-Qura table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRecord {
    year: i32,
    month_mask: u16,
    /// Gregorian (year, month, day) of 1 Muharram.
    gregorian: (i32, u32, u32),
}

impl YearRecord {
    pub(crate) const fn new(year: i32, month_mask: u16, gy: i32, gm: u32, gd: u32) -> Self {
        Self {
            year,
            month_mask,
            gregorian: (gy, gm, gd),
        }
    }

    /// The Hijri year this record describes.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month-length bits; bit 0 is Muharram, a set bit means 30 days.
    pub fn month_mask(&self) -> u16 {
        self.month_mask
    }

    /// Whether this is the end-of-table marker rather than a real year.
    pub fn is_sentinel(&self) -> bool {
        self.month_mask == 0
    }

    /// Gregorian (year, month, day) of 1 Muharram.
    pub fn gregorian(&self) -> (i32, u32, u32) {
        self.gregorian
    }

    /// Gregorian date of 1 Muharram.
    pub fn start_date(&self) -> Option<NaiveDate> {
        let (y, m, d) = self.gregorian;
        NaiveDate::from_ymd_opt(y, m, d)
    }

    /// Length of `month` (1-12), or `None` for an out-of-range month or the sentinel.
    pub fn days_in_month(&self, month: u32) -> Option<u32> {
        if self.is_sentinel() || !(1..=MONTHS_PER_YEAR).contains(&month) {
            return None;
        }
        Some(self.month_length(month))
    }

    /// Days from 1 Muharram to the first day of `month`.
    ///
    /// `month = 13` yields the length of the whole year.
    pub fn days_before_month(&self, month: u32) -> u32 {
        (1..month.min(MONTHS_PER_YEAR + 1))
            .map(|m| self.month_length(m))
            .sum()
    }

    /// Total days in the year (354 or 355).
    pub fn year_length(&self) -> u32 {
        self.days_before_month(MONTHS_PER_YEAR + 1)
    }

    fn month_length(&self, month: u32) -> u32 {
        if (self.month_mask >> (month - 1)) & 1 == 1 {
            30
        } else {
            29
        }
    }
}

/// The full table, sentinel included.
pub fn year_table() -> &'static [YearRecord] {
    &YEAR_TABLE
}

/// Returns the last real record for which `at_or_before` holds.
///
/// `at_or_before` must be monotone over the table: true for a prefix of the
/// records and false for the rest.
fn search_last<F>(at_or_before: F) -> Option<&'static YearRecord>
where
    F: Fn(&YearRecord) -> bool,
{
    let end = YEAR_TABLE.partition_point(|record| at_or_before(record));
    let record = YEAR_TABLE.get(end.checked_sub(1)?)?;
    if record.is_sentinel() {
        None
    } else {
        Some(record)
    }
}

/// Finds the record for Hijri `year`.
pub fn find_year(year: i32) -> Option<&'static YearRecord> {
    search_last(|record| record.year <= year).filter(|record| record.year == year)
}

/// Finds the record of the Hijri year whose 1 Muharram is the latest one on
/// or before `date`.
///
/// Comparison is by calendar day, so any time-of-day must already be dropped.
pub fn find_containing(date: NaiveDate) -> Option<&'static YearRecord> {
    let key = (date.year(), date.month(), date.day());
    search_last(|record| record.gregorian <= key)
}
