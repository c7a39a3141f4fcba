//! Calendar selection and formatting options.

use std::str::FromStr;

use crate::error::ParseError;
use crate::locale::Locale;

/// The Hijri calendar variant used for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarSystem {
    /// Saudi Umm al-Qura table, Hijri years 1318 to 1500.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "uaq"))]
    UmmAlQura,
    /// Fiqh Council of North America astronomical criterion, any year from 1 AH.
    Fcna,
}

impl CalendarSystem {
    /// Short lowercase identifier, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            CalendarSystem::UmmAlQura => "uaq",
            CalendarSystem::Fcna => "fcna",
        }
    }
}

impl FromStr for CalendarSystem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uaq" | "umm-al-qura" | "ummalqura" => Ok(CalendarSystem::UmmAlQura),
            "fcna" | "isna" => Ok(CalendarSystem::Fcna),
            _ => Err(ParseError::UnknownCalendar(s.to_string())),
        }
    }
}

/// Options for formatting Hijri dates.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Calendar used to resolve the Gregorian day behind weekday and time tokens.
    pub calendar: CalendarSystem,
    /// Month, weekday and era names.
    pub locale: Locale,
}

impl FormatOptions {
    /// Default options with the given calendar system.
    pub fn with_calendar(calendar: CalendarSystem) -> Self {
        Self {
            calendar,
            ..Self::default()
        }
    }
}
