//! Umm al-Qura conversion through the year table.
//!
//! Coverage is Hijri 1318-01-01 (1900-04-30) through the end of 1500
//! (2077-11-16). Everything outside that span has no Umm al-Qura date.

use chrono::{Days, NaiveDate};

use crate::hijri::HijriDate;
use crate::table;

/// Gregorian date of Hijri `year`-`month`-`day`.
///
/// Returns `None` when `year` is not in the table. Month and day are not
/// range-checked here; see [`is_valid`].
pub fn to_gregorian(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let record = table::find_year(year)?;
    let offset = u64::from(record.days_before_month(month)) + u64::from(day.checked_sub(1)?);
    record.start_date()?.checked_add_days(Days::new(offset))
}

/// Hijri date of the Gregorian day `date`.
///
/// Returns `None` before 1 Muharram 1318 and from 1 Muharram 1501 on.
pub fn to_hijri(date: NaiveDate) -> Option<HijriDate> {
    let record = table::find_containing(date)?;
    let mut remaining = date.signed_duration_since(record.start_date()?).num_days();

    for month in 1..=12 {
        let length = i64::from(record.days_in_month(month)?);
        if remaining < length {
            let day = u32::try_from(remaining + 1).ok()?;
            return Some(HijriDate::new(record.year(), month, day));
        }
        remaining -= length;
    }

    // Past the end of this record's year with no later record to take over
    None
}

/// Length of `month` in `year`, or `None` if either is out of range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    table::find_year(year)?.days_in_month(month)
}

/// Whether `year`-`month`-`day` exists in the Umm al-Qura calendar.
pub fn is_valid(year: i32, month: u32, day: u32) -> bool {
    days_in_month(year, month).is_some_and(|length| (1..=length).contains(&day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_to_gregorian_known_dates() {
        assert_eq!(to_gregorian(1318, 1, 1), Some(date(1900, 4, 30)));
        assert_eq!(to_gregorian(1444, 1, 1), Some(date(2022, 7, 30)));
        assert_eq!(to_gregorian(1444, 9, 1), Some(date(2023, 3, 23)));
        assert_eq!(to_gregorian(1444, 10, 1), Some(date(2023, 4, 21)));
        assert_eq!(to_gregorian(1446, 1, 1), Some(date(2024, 7, 7)));
        assert_eq!(to_gregorian(1446, 9, 1), Some(date(2025, 3, 1)));
    }

    #[test]
    fn test_to_gregorian_crosses_leap_day() {
        // 1445: 1 Sha'ban is 11 Feb 2024, so day 19 lands on 29 Feb
        assert_eq!(to_gregorian(1445, 8, 19), Some(date(2024, 2, 29)));
        assert_eq!(to_gregorian(1445, 8, 20), Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_to_gregorian_out_of_table() {
        assert_eq!(to_gregorian(1317, 12, 29), None);
        assert_eq!(to_gregorian(1501, 1, 1), None);
        assert_eq!(to_gregorian(1444, 1, 0), None);
    }

    #[test]
    fn test_to_hijri_known_dates() {
        assert_eq!(to_hijri(date(1900, 4, 30)), Some(HijriDate::new(1318, 1, 1)));
        assert_eq!(to_hijri(date(2022, 7, 30)), Some(HijriDate::new(1444, 1, 1)));
        assert_eq!(to_hijri(date(2023, 3, 23)), Some(HijriDate::new(1444, 9, 1)));
        assert_eq!(to_hijri(date(2023, 4, 20)), Some(HijriDate::new(1444, 9, 29)));
        assert_eq!(to_hijri(date(2023, 4, 21)), Some(HijriDate::new(1444, 10, 1)));
    }

    #[test]
    fn test_to_hijri_table_edges() {
        assert_eq!(to_hijri(date(1900, 4, 29)), None);
        assert_eq!(to_hijri(date(1800, 1, 1)), None);
        assert_eq!(to_hijri(date(2077, 11, 16)), Some(HijriDate::new(1500, 12, 30)));
        assert_eq!(to_hijri(date(2077, 11, 17)), None);
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(1318, 1, 1));
        assert!(is_valid(1444, 9, 29));
        assert!(is_valid(1500, 12, 29));
        assert!(!is_valid(1317, 12, 29));
        assert!(!is_valid(1501, 1, 1));
        assert!(!is_valid(1444, 0, 1));
        assert!(!is_valid(1444, 13, 1));
        assert!(!is_valid(1444, 9, 0));
        assert!(!is_valid(1444, 9, 30));
        assert!(!is_valid(1, 1, 1));
    }

    #[test]
    fn test_roundtrip_whole_table() {
        for record in &table::year_table()[..182] {
            for month in 1..=12 {
                let length = record.days_in_month(month).unwrap();
                for day in 1..=length {
                    let gregorian = to_gregorian(record.year(), month, day).unwrap();
                    assert_eq!(
                        to_hijri(gregorian),
                        Some(HijriDate::new(record.year(), month, day)),
                        "roundtrip failed via {gregorian}"
                    );
                }
            }
        }
    }
}
