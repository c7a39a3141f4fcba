//! Hijri date fields

use chrono::{Datelike, NaiveDate};

use crate::ast::Field;
use crate::hijri::HijriDate;
use crate::locale::Locale;

/// Format a field that depends only on the Hijri date itself.
pub fn format_date_field(field: Field, date: &HijriDate, locale: &Locale) -> String {
    match field {
        Field::Year4 => format!("{:04}", date.year),
        Field::Year2 => format!("{:02}", date.year.rem_euclid(100)),

        Field::Month => date.month.to_string(),
        Field::Month2 => format!("{:02}", date.month),
        Field::MonthMedium => month_name(&locale.month_names_medium, date.month).to_string(),
        Field::MonthLong => month_name(&locale.month_names_long, date.month).to_string(),

        Field::Day => date.day.to_string(),
        Field::Day2 => format!("{:02}", date.day),

        Field::Era => locale.era.to_string(),

        // Weekday and time fields are resolved by the caller from the Gregorian day
        Field::WeekdayLong | Field::WeekdayShort | Field::WeekdayNumber | Field::Time(_) => {
            String::new()
        }
    }
}

/// Format a weekday field for the Gregorian day `day`.
pub fn format_weekday(field: Field, day: NaiveDate, locale: &Locale) -> String {
    let index = day.weekday().num_days_from_sunday() as usize;
    match field {
        Field::WeekdayNumber => locale.day_numbers[index].to_string(),
        Field::WeekdayShort => locale.day_names_short[index].to_string(),
        _ => locale.day_names_long[index].to_string(),
    }
}

/// Month name for a 1-based month; out-of-range months render empty.
fn month_name(names: &[&'static str; 12], month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| names.get(index as usize))
        .copied()
        .unwrap_or("")
}
