//! Properties that hold across whole ranges of both calendars.

use chrono::{DateTime, Days, NaiveDate, Utc};
use hijri_calendar::fcna::month_start_from_conjunction;
use hijri_calendar::{
    days_in_month, is_valid, to_gregorian, to_hijri, year_table, CalendarSystem, HijriDate,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The Hijri date one day after `date`, given the length of its month.
fn successor(date: HijriDate, month_length: u32) -> HijriDate {
    if date.day < month_length {
        HijriDate::new(date.year, date.month, date.day + 1)
    } else if date.month < 12 {
        HijriDate::new(date.year, date.month + 1, 1)
    } else {
        HijriDate::new(date.year + 1, 1, 1)
    }
}

fn assert_consecutive(system: CalendarSystem, from: NaiveDate, until: NaiveDate) {
    let mut day = from;
    let mut previous = to_hijri(day, system).unwrap().unwrap();
    while day < until {
        day = day.checked_add_days(Days::new(1)).unwrap();
        let current = to_hijri(day, system).unwrap().unwrap();
        let length = days_in_month(previous.year, previous.month, system).unwrap();
        assert_eq!(current, successor(previous, length), "{system:?} {day}");
        previous = current;
    }
}

#[test]
fn test_uaq_days_are_consecutive_over_table() {
    assert_consecutive(CalendarSystem::UmmAlQura, ymd(1900, 4, 30), ymd(2077, 11, 16));
}

#[test]
fn test_fcna_days_are_consecutive() {
    assert_consecutive(CalendarSystem::Fcna, ymd(2019, 1, 1), ymd(2027, 1, 1));
    assert_consecutive(CalendarSystem::Fcna, ymd(622, 7, 18), ymd(624, 1, 1));
}

#[test]
fn test_uaq_month_lengths() {
    for record in year_table().iter().filter(|record| !record.is_sentinel()) {
        let total: u32 = (1..=12)
            .map(|month| {
                let length = days_in_month(record.year(), month, CalendarSystem::UmmAlQura)
                    .unwrap();
                assert!(length == 29 || length == 30, "{} {month}", record.year());
                length
            })
            .sum();
        assert!((354..=355).contains(&total), "{}: {total}", record.year());
    }
}

#[test]
fn test_fcna_month_lengths() {
    for year in (1..=30).chain(1300..=1320).chain(1440..=1460).chain(1990..=2000) {
        for month in 1..=12 {
            let length = days_in_month(year, month, CalendarSystem::Fcna).unwrap();
            assert!(length == 29 || length == 30, "{year}-{month}: {length}");
        }
    }
}

#[test]
fn test_fcna_round_trip_month_edges() {
    for year in (1..=12).chain(1316..=1320).chain(1444..=1448).chain(1499..=1503) {
        for month in 1..=12 {
            let length = days_in_month(year, month, CalendarSystem::Fcna).unwrap();
            for day in [1, length] {
                let gregorian = to_gregorian(year, month, day, CalendarSystem::Fcna).unwrap();
                let back = to_hijri(gregorian, CalendarSystem::Fcna).unwrap();
                assert_eq!(back, Some(HijriDate::new(year, month, day)), "{gregorian}");
            }
        }
    }
}

#[test]
fn test_uaq_table_boundaries() {
    let system = CalendarSystem::UmmAlQura;
    assert_eq!(
        to_hijri(ymd(1900, 4, 30), system).unwrap(),
        Some(HijriDate::new(1318, 1, 1))
    );
    assert_eq!(to_hijri(ymd(1900, 4, 29), system).unwrap(), None);
    assert_eq!(
        to_hijri(ymd(2077, 11, 16), system).unwrap(),
        Some(HijriDate::new(1500, 12, 30))
    );
    assert_eq!(to_hijri(ymd(2077, 11, 17), system).unwrap(), None);

    assert!(to_gregorian(1317, 12, 29, system).is_err());
    assert!(to_gregorian(1501, 1, 1, system).is_err());
    assert_eq!(days_in_month(1317, 12, system), None);
    assert_eq!(days_in_month(1501, 1, system), None);
    assert!(!is_valid(1501, 1, 1, system));
}

#[test]
fn test_fcna_extends_beyond_table() {
    let system = CalendarSystem::Fcna;
    assert_eq!(to_gregorian(1317, 12, 1, system).unwrap(), ymd(1900, 4, 1));
    assert_eq!(to_gregorian(1501, 1, 1, system).unwrap(), ymd(2077, 11, 17));
    assert_eq!(to_gregorian(1, 1, 1, system).unwrap(), ymd(622, 7, 18));
    assert_eq!(to_hijri(ymd(622, 7, 1), system).unwrap(), None);
}

#[test]
fn test_invalid_components_rejected() {
    for system in [CalendarSystem::UmmAlQura, CalendarSystem::Fcna] {
        assert!(!is_valid(1444, 0, 1, system));
        assert!(!is_valid(1444, 13, 1, system));
        assert!(!is_valid(1444, 1, 0, system));
        assert!(!is_valid(1444, 1, 31, system));
        assert_eq!(days_in_month(1444, 13, system), None);
    }
    assert!(!is_valid(0, 1, 1, CalendarSystem::Fcna));
    assert!(!is_valid(-5, 1, 1, CalendarSystem::Fcna));
    // Ramadan 1446 has 29 days in both systems
    assert!(!is_valid(1446, 9, 30, CalendarSystem::UmmAlQura));
    assert!(!is_valid(1446, 9, 30, CalendarSystem::Fcna));
}

#[test]
fn test_noon_rule() {
    let before_noon: DateTime<Utc> = "2025-02-28T11:59:59.999999Z".parse().unwrap();
    let at_noon: DateTime<Utc> = "2025-02-28T12:00:00Z".parse().unwrap();
    let early: DateTime<Utc> = "2025-02-28T00:45:00Z".parse().unwrap();

    assert_eq!(month_start_from_conjunction(before_noon), Some(ymd(2025, 3, 1)));
    assert_eq!(month_start_from_conjunction(early), Some(ymd(2025, 3, 1)));
    assert_eq!(month_start_from_conjunction(at_noon), Some(ymd(2025, 3, 2)));
}

#[test]
fn test_systems_can_disagree() {
    assert_eq!(
        to_gregorian(1445, 12, 1, CalendarSystem::UmmAlQura).unwrap(),
        ymd(2024, 6, 7)
    );
    assert_eq!(
        to_gregorian(1445, 12, 1, CalendarSystem::Fcna).unwrap(),
        ymd(2024, 6, 8)
    );
    assert_eq!(
        to_hijri(ymd(2024, 6, 7), CalendarSystem::Fcna).unwrap(),
        Some(HijriDate::new(1445, 11, 30))
    );
}
