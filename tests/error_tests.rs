use hijri_calendar::{to_gregorian, to_hijri, CalendarSystem, ConversionError, FormatError, ParseError};

#[test]
fn test_invalid_hijri_display() {
    let err = ConversionError::InvalidHijriDate {
        year: 1444,
        month: 13,
        day: 1,
    };
    assert_eq!(err.to_string(), "invalid Hijri date: 1444-13-01");
}

#[test]
fn test_invalid_gregorian_display() {
    let err = to_hijri("2023-02-30", CalendarSystem::UmmAlQura).unwrap_err();
    assert_eq!(err.to_string(), "invalid Gregorian date: 2023-02-30");
}

#[test]
fn test_conversion_errors_carry_input() {
    assert_eq!(
        to_gregorian(1444, 9, 31, CalendarSystem::Fcna).unwrap_err(),
        ConversionError::InvalidHijriDate {
            year: 1444,
            month: 9,
            day: 31
        }
    );
    assert_eq!(
        to_hijri((2023, 2, 29), CalendarSystem::Fcna).unwrap_err(),
        ConversionError::InvalidGregorianDate("2023-02-29".to_string())
    );
}

#[test]
fn test_parse_error_display() {
    let err = ParseError::UnterminatedQuote { position: 5 };
    assert!(err.to_string().contains("position 5"));

    let err = ParseError::UnknownCalendar("julian".to_string());
    assert!(err.to_string().contains("'julian'"));
}

#[test]
fn test_format_error_is_transparent() {
    let inner = ParseError::UnterminatedQuote { position: 0 };
    let err = FormatError::from(inner.clone());
    assert_eq!(err.to_string(), inner.to_string());
}
