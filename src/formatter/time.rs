//! Time-of-day and zone fields
//!
//! A Hijri date is a whole day, so these render the UTC midnight that begins
//! the corresponding Gregorian day.

use chrono::{DateTime, NaiveDate, NaiveTime, Offset, Timelike, Utc};

use crate::ast::TimeField;
use crate::locale::Locale;

/// Format a time field for the start of the Gregorian day `day`.
pub fn format_time_field(field: TimeField, day: NaiveDate, locale: &Locale) -> String {
    let instant = day.and_time(NaiveTime::MIN).and_utc();

    match field {
        TimeField::Hour24Padded => instant.format("%H").to_string(),
        TimeField::Hour24 => instant.hour().to_string(),
        TimeField::Hour12Padded => instant.format("%I").to_string(),
        TimeField::Hour12 => instant.hour12().1.to_string(),
        TimeField::Minute2 => instant.format("%M").to_string(),
        TimeField::Minute => instant.minute().to_string(),
        TimeField::Second2 => instant.format("%S").to_string(),
        TimeField::Second => instant.second().to_string(),
        TimeField::Meridiem => format_meridiem(instant.hour(), locale),
        TimeField::ZoneName => instant.timezone().to_string(),
        TimeField::OffsetFull => instant.format("%:z").to_string(),
        TimeField::OffsetNarrow => format_narrow_offset(&instant),
    }
}

fn format_meridiem(hour: u32, locale: &Locale) -> String {
    if hour < 12 {
        locale.am_string.to_string()
    } else {
        locale.pm_string.to_string()
    }
}

/// Offset with hours unpadded and minutes only when non-zero: `+0`, `-5`, `+5:30`.
fn format_narrow_offset(instant: &DateTime<Utc>) -> String {
    let seconds = instant.offset().fix().local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if minutes == 0 {
        format!("{sign}{hours}")
    } else {
        format!("{sign}{hours}:{minutes:02}")
    }
}
