//! Named preset patterns.
//!
//! Presets give callers stable names for the common layouts so they do not
//! have to spell out token patterns.

/// Names accepted by [`pattern_by_name`].
pub const PATTERN_NAMES: [&str; 5] = ["iso", "short", "medium", "long", "full"];

/// Get the pattern string for a preset name.
///
/// # Examples
/// ```
/// use hijri_calendar::{format_default, pattern_by_name, HijriDate};
///
/// let pattern = pattern_by_name("long").unwrap();
/// let text = format_default(&HijriDate::new(1444, 9, 1), pattern).unwrap();
/// assert_eq!(text, "1 Ramadan 1444 AH");
/// assert_eq!(pattern_by_name("unknown"), None);
/// ```
pub fn pattern_by_name(name: &str) -> Option<&'static str> {
    match name {
        "iso" => Some("iYYYY-iMM-iDD"),
        "short" => Some("iDD/iMM/iYYYY"),
        "medium" => Some("iD iMMM iYYYY"),
        "long" => Some("iD iMMMM iYYYY ioooo"),
        "full" => Some("iEEEE, iD iMMMM iYYYY ioooo"),
        _ => None,
    }
}
