//! Month, weekday and era names used by the formatter.

mod builtin;

pub use builtin::{
    Locale, MONTH_NAMES_LONG, MONTH_NAMES_MEDIUM, MONTH_NAMES_SHORT, WEEKDAY_NAMES_LONG,
    WEEKDAY_NAMES_SHORT, WEEKDAY_NUMBERS,
};
