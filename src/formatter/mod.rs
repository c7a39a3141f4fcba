//! Pattern formatting engine

mod date;
mod time;

use chrono::NaiveDate;

use crate::ast::{Field, Pattern, PatternPart};
use crate::error::FormatError;
use crate::hijri::HijriDate;
use crate::options::FormatOptions;

impl Pattern {
    /// Format a Hijri date with this pattern.
    ///
    /// The date is only converted to the Gregorian calendar when the pattern
    /// has weekday or time fields. For such patterns the date must be valid in
    /// `opts.calendar`; patterns made of plain date fields format any value.
    pub fn format(&self, date: &HijriDate, opts: &FormatOptions) -> Result<String, FormatError> {
        let gregorian = if self.needs_gregorian() {
            Some(date.to_gregorian(opts.calendar)?)
        } else {
            None
        };

        let mut result = String::new();
        for part in self.parts() {
            match part {
                PatternPart::Literal(text) => result.push_str(text),
                PatternPart::Field(field) => {
                    result.push_str(&format_field(*field, date, gregorian, opts));
                }
            }
        }
        Ok(result)
    }
}

fn format_field(
    field: Field,
    date: &HijriDate,
    gregorian: Option<NaiveDate>,
    opts: &FormatOptions,
) -> String {
    match (field, gregorian) {
        (Field::Time(time_field), Some(day)) => time::format_time_field(time_field, day, &opts.locale),
        (Field::WeekdayLong | Field::WeekdayShort | Field::WeekdayNumber, Some(day)) => {
            date::format_weekday(field, day, &opts.locale)
        }
        _ => date::format_date_field(field, date, &opts.locale),
    }
}
