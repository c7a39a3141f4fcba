//! Tests for pattern parsing.

use hijri_calendar::ast::{Field, PatternPart, TimeField};
use hijri_calendar::Pattern;

#[test]
fn test_parse_full_pattern() {
    let pattern = Pattern::parse("iEEEE, iD iMMMM iYYYY").unwrap();
    assert_eq!(
        pattern.parts(),
        &[
            PatternPart::Field(Field::WeekdayLong),
            PatternPart::Literal(", ".to_string()),
            PatternPart::Field(Field::Day),
            PatternPart::Literal(" ".to_string()),
            PatternPart::Field(Field::MonthLong),
            PatternPart::Literal(" ".to_string()),
            PatternPart::Field(Field::Year4),
        ]
    );
}

#[test]
fn test_parse_via_from_str() {
    let pattern: Pattern = "iDD/iMM".parse().unwrap();
    assert_eq!(pattern, Pattern::parse("iDD/iMM").unwrap());
}

#[test]
fn test_needs_gregorian() {
    assert!(!Pattern::parse("iYYYY-iMM-iDD ioooo").unwrap().needs_gregorian());
    assert!(Pattern::parse("iE").unwrap().needs_gregorian());
    assert!(Pattern::parse("HH").unwrap().needs_gregorian());
    assert!(Field::Time(TimeField::ZoneName).needs_gregorian());
    assert!(!Field::MonthMedium.needs_gregorian());
}

#[test]
fn test_parse_literal_only() {
    let pattern = Pattern::parse("'Hijri'").unwrap();
    assert_eq!(pattern.parts(), &[PatternPart::Literal("Hijri".to_string())]);
    assert!(!pattern.needs_gregorian());
}

#[test]
fn test_parse_error() {
    assert!(Pattern::parse("'").is_err());
    assert!(Pattern::parse("iD 'x").is_err());
}
