//! FCNA/ISNA astronomical Hijri calendar.
//!
//! The Fiqh Council of North America fixes month starts from the geocentric
//! conjunction alone. A conjunction before 12:00 UTC on day D starts the month
//! on D+1; a conjunction at or after noon starts it on D+2.
//!
//! To locate the conjunction that opens a given Hijri month, an anchor near it
//! is found first. Inside the Umm al-Qura table the anchor is the UAQ month
//! start, a day or two after the conjunction. Outside the table it is the
//! conjunction of the month's nominal lunation index. The nearest true new
//! moon to that anchor is then fed to the noon rule.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};

use crate::hijri::{self, HijriDate};
use crate::new_moon;
use crate::table;

/// Lunations searched on each side of the mean-motion estimate when looking
/// for the new moon nearest an anchor.
///
/// Empirical margin: the estimate can be off by a lunation near table
/// estimation error, and two on each side has been enough over 1-2000 AH.
/// It is not a proven bound.
pub const NEAREST_NEW_MOON_WINDOW: i64 = 2;

/// Lunations searched on each side of the estimate when locating the month
/// that contains a Gregorian day. Empirical, like [`NEAREST_NEW_MOON_WINDOW`].
pub const LOCATOR_WINDOW: i64 = 1;

/// The locator estimates its lunation from this many days before the input
/// so that late-month days do not snap to the next month's conjunction.
const LOCATOR_LOOKBACK_DAYS: i64 = 15;

/// First day of the month opened by a conjunction at `conjunction`.
pub fn month_start_from_conjunction(conjunction: DateTime<Utc>) -> Option<NaiveDate> {
    let days_after = if conjunction.hour() < 12 { 1 } else { 2 };
    conjunction
        .date_naive()
        .checked_add_days(Days::new(days_after))
}

/// Instant near the conjunction that opens Hijri `year`-`month`.
///
/// Only a search seed, not a month start.
pub fn anchor_instant(year: i32, month: u32) -> Option<DateTime<Utc>> {
    match table::find_year(year) {
        Some(record) => {
            let offset = Days::new(u64::from(record.days_before_month(month)));
            let start = record.start_date()?.checked_add_days(offset)?;
            Some(start.and_time(NaiveTime::MIN).and_utc())
        }
        None => new_moon::new_moon_instant(hijri::lunation_index(year, month)),
    }
}

/// The true new moon closest to `anchor`.
pub fn nearest_new_moon(anchor: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let anchor_jde = new_moon::instant_to_jde(anchor);
    let estimate = new_moon::mean_lunation(anchor_jde).round() as i64;

    let (k, jde) = (estimate - NEAREST_NEW_MOON_WINDOW..=estimate + NEAREST_NEW_MOON_WINDOW)
        .map(|k| (k, new_moon::new_moon_jde(k)))
        .min_by(|(_, a), (_, b)| (a - anchor_jde).abs().total_cmp(&(b - anchor_jde).abs()))?;

    log::debug!("nearest new moon to {anchor}: lunation {k}");
    new_moon::jde_to_instant(jde)
}

/// First Gregorian day of FCNA Hijri `year`-`month`.
pub fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    let anchor = anchor_instant(year, month)?;
    month_start_from_conjunction(nearest_new_moon(anchor)?)
}

/// First Gregorian day of the month opened by lunation `k`.
fn lunation_start(k: i64) -> Option<NaiveDate> {
    month_start_from_conjunction(new_moon::new_moon_instant(k)?)
}

/// Length of FCNA Hijri `year`-`month`, or `None` if there is no such month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if year < 1 || !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };

    let start = month_start(year, month)?;
    let next = month_start(next_year, next_month)?;
    u32::try_from(next.signed_duration_since(start).num_days()).ok()
}

/// Whether `year`-`month`-`day` exists in the FCNA calendar.
pub fn is_valid(year: i32, month: u32, day: u32) -> bool {
    day >= 1 && days_in_month(year, month).is_some_and(|length| day <= length)
}

/// Gregorian date of FCNA Hijri `year`-`month`-`day`, or `None` if invalid.
pub fn to_gregorian(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if !is_valid(year, month, day) {
        return None;
    }
    month_start(year, month)?.checked_add_days(Days::new(u64::from(day - 1)))
}

/// FCNA Hijri date of the Gregorian day `date`.
///
/// Returns `None` for days before 1 Muharram 1 AH.
pub fn to_hijri(date: NaiveDate) -> Option<HijriDate> {
    let midnight = date.and_time(NaiveTime::MIN).and_utc();
    let lookback = midnight.checked_sub_signed(TimeDelta::days(LOCATOR_LOOKBACK_DAYS))?;
    let estimate = new_moon::mean_lunation(new_moon::instant_to_jde(lookback)).floor() as i64;

    for k in estimate - LOCATOR_WINDOW..=estimate + LOCATOR_WINDOW {
        let start = lunation_start(k)?;
        if start > date {
            continue;
        }
        if date < lunation_start(k + 1)? {
            let (year, month) = hijri::month_of_lunation(k);
            if year < 1 {
                return None;
            }
            let day = date.signed_duration_since(start).num_days() + 1;
            return Some(HijriDate::new(
                i32::try_from(year).ok()?,
                month,
                u32::try_from(day).ok()?,
            ));
        }
    }

    log::warn!(
        "no FCNA month brackets {date} (lunations {}..={})",
        estimate - LOCATOR_WINDOW,
        estimate + LOCATOR_WINDOW
    );
    None
}
