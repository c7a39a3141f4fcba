//! Token types for the pattern lexer.

use crate::ast::{Field, TimeField};

/// A token in a pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Field(Field),
    Literal(char),
    /// Text between single quotes, copied verbatim
    QuotedString(String),
    Eof,
}

/// Field spellings. Longer spellings precede their prefixes so the first
/// match at a position is the longest one.
#[rustfmt::skip]
pub(crate) const FIELD_TOKENS: [(&str, Field); 27] = [
    ("iYYYY", Field::Year4),
    ("iYY", Field::Year2),
    ("iMMMM", Field::MonthLong),
    ("iMMM", Field::MonthMedium),
    ("iMM", Field::Month2),
    ("iM", Field::Month),
    ("iDD", Field::Day2),
    ("iD", Field::Day),
    ("iEEEE", Field::WeekdayLong),
    ("iEEE", Field::WeekdayShort),
    ("iE", Field::WeekdayNumber),
    ("ioooo", Field::Era),
    ("iooo", Field::Era),
    ("HH", Field::Time(TimeField::Hour24Padded)),
    ("H", Field::Time(TimeField::Hour24)),
    ("hh", Field::Time(TimeField::Hour12Padded)),
    ("h", Field::Time(TimeField::Hour12)),
    ("mm", Field::Time(TimeField::Minute2)),
    ("m", Field::Time(TimeField::Minute)),
    ("ss", Field::Time(TimeField::Second2)),
    ("s", Field::Time(TimeField::Second)),
    ("a", Field::Time(TimeField::Meridiem)),
    ("zzz", Field::Time(TimeField::ZoneName)),
    ("zz", Field::Time(TimeField::ZoneName)),
    ("z", Field::Time(TimeField::ZoneName)),
    ("ZZ", Field::Time(TimeField::OffsetFull)),
    ("Z", Field::Time(TimeField::OffsetNarrow)),
];
