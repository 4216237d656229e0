//! Settable date-time fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single settable field of a [`crate::moment::Moment`].
///
/// Each variant carries its replacement value, so an unrecognized field name
/// cannot exist at runtime; the only fallible cases left are out-of-range
/// component values and unknown timezone identifiers.
///
/// ```rust
/// use tempus_core::prelude::*;
///
/// let mut moment = Moment::from_date(chrono::NaiveDate::from_ymd_opt(2021, 2, 28).unwrap());
/// moment.replace(Field::Day(27)).unwrap();
/// assert_eq!(moment.current().day(), 27);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// Day of month (1-31).
    Day(u32),
    /// Hour of day (0-23).
    Hour(u32),
    /// Minute of hour (0-59).
    Minute(u32),
    /// Second of minute (0-59).
    Second(u32),
    /// Microsecond of second (0-999999).
    Microsecond(u32),
    /// Month of year (1-12).
    Month(u32),
    /// Calendar year.
    Year(i32),
    /// IANA timezone identifier, e.g. `"America/New_York"`.
    Timezone(String),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Day(v) => write!(f, "day={v}"),
            Field::Hour(v) => write!(f, "hour={v}"),
            Field::Minute(v) => write!(f, "minute={v}"),
            Field::Second(v) => write!(f, "second={v}"),
            Field::Microsecond(v) => write!(f, "microsecond={v}"),
            Field::Month(v) => write!(f, "month={v}"),
            Field::Year(v) => write!(f, "year={v}"),
            Field::Timezone(name) => write!(f, "timezone={name}"),
        }
    }
}
