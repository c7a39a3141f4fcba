//! AST types for parsed Hijri format patterns.

use crate::error::ParseError;
use std::str::FromStr;

/// Time-of-day and zone fields, rendered from the UTC midnight that starts
/// the date's Gregorian day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour24Padded, // HH
    Hour24,       // H
    Hour12Padded, // hh
    Hour12,       // h
    Minute2,      // mm
    Minute,       // m
    Second2,      // ss
    Second,       // s
    Meridiem,     // a
    ZoneName,     // z, zz, zzz
    OffsetFull,   // ZZ
    OffsetNarrow, // Z
}

/// A substitutable field in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Year4,         // iYYYY
    Year2,         // iYY
    MonthLong,     // iMMMM
    MonthMedium,   // iMMM
    Month2,        // iMM
    Month,         // iM
    Day2,          // iDD
    Day,           // iD
    WeekdayLong,   // iEEEE
    WeekdayShort,  // iEEE
    WeekdayNumber, // iE
    Era,           // iooo, ioooo
    Time(TimeField),
}

impl Field {
    /// Whether rendering this field needs the Gregorian equivalent of the date.
    pub fn needs_gregorian(&self) -> bool {
        matches!(
            self,
            Field::WeekdayLong | Field::WeekdayShort | Field::WeekdayNumber | Field::Time(_)
        )
    }
}

/// One piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    Field(Field),
    Literal(String),
}

/// A parsed format pattern such as `iEEEE, iD iMMMM iYYYY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    parts: Vec<PatternPart>,
}

impl Pattern {
    /// Parse a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, ParseError> {
        crate::parser::parse(pattern)
    }

    pub(crate) fn from_parts(parts: Vec<PatternPart>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    /// Whether any field needs the Gregorian date (weekday and time fields).
    pub fn needs_gregorian(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, PatternPart::Field(field) if field.needs_gregorian()))
    }
}

impl FromStr for Pattern {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
