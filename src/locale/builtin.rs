//! Built-in transliterated name tables.
//!
//! Weekday tables are indexed from Sunday (0) to Saturday (6).

/// Full Hijri month names.
pub const MONTH_NAMES_LONG: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Medium-length Hijri month names.
pub const MONTH_NAMES_MEDIUM: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi I",
    "Rabi II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

/// Abbreviated Hijri month names.
///
/// No pattern field renders these; they are for callers building their own
/// labels.
pub const MONTH_NAMES_SHORT: [&str; 12] = [
    "Muh", "Saf", "Rab1", "Rab2", "Jum1", "Jum2", "Raj", "Sha", "Ram", "Shw", "DhQ", "DhH",
];

pub const WEEKDAY_NAMES_LONG: [&str; 7] = [
    "Yawm al-Ahad",
    "Yawm al-Ithnayn",
    "Yawm ath-Thulatha'",
    "Yawm al-Arbi'a'",
    "Yawm al-Khamis",
    "Yawm al-Jum'ah",
    "Yawm as-Sabt",
];

pub const WEEKDAY_NAMES_SHORT: [&str; 7] = ["Ahad", "Ithn", "Thul", "Arba", "Kham", "Jum", "Sabt"];

/// Day-of-week numbers, Sunday being the first day.
pub const WEEKDAY_NUMBERS: [u32; 7] = [1, 2, 3, 4, 5, 6, 7];

/// Name tables for formatting.
#[derive(Debug, Clone)]
pub struct Locale {
    pub month_names_long: [&'static str; 12],
    pub month_names_medium: [&'static str; 12],
    pub day_names_long: [&'static str; 7],
    pub day_names_short: [&'static str; 7],
    pub day_numbers: [u32; 7],
    pub era: &'static str,
    pub am_string: &'static str,
    pub pm_string: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::transliterated()
    }
}

impl Locale {
    /// Arabic names in Latin transliteration.
    pub fn transliterated() -> Self {
        Locale {
            month_names_long: MONTH_NAMES_LONG,
            month_names_medium: MONTH_NAMES_MEDIUM,
            day_names_long: WEEKDAY_NAMES_LONG,
            day_names_short: WEEKDAY_NAMES_SHORT,
            day_numbers: WEEKDAY_NUMBERS,
            era: "AH",
            am_string: "AM",
            pm_string: "PM",
        }
    }
}
