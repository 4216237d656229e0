//! Sparse calendar-unit offsets.

use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// A signed, sparse set of calendar-unit offsets.
///
/// Every field defaults to zero; build the deltas you need with the
/// chainable setters:
///
/// ```rust
/// use tempus_core::types::CalendarDelta;
///
/// let delta = CalendarDelta::new().months(1).days(-3);
/// assert_eq!(delta.months, 1);
/// assert_eq!(delta.days, -3);
/// ```
///
/// The units are not interchangeable: `years` and `months` are applied as
/// calendar-field shifts with day-of-month clamping to the target month's
/// length, while `weeks`, `days` and the time-of-day units are fixed-duration
/// offsets. See [`crate::calendar::increment`] for the application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarDelta {
    /// Calendar-year shift.
    #[serde(default)]
    pub years: i32,
    /// Calendar-month shift.
    #[serde(default)]
    pub months: i32,
    /// Fixed offset of 7-day weeks.
    #[serde(default)]
    pub weeks: i64,
    /// Fixed offset of 24-hour days.
    #[serde(default)]
    pub days: i64,
    /// Fixed offset of hours.
    #[serde(default)]
    pub hours: i64,
    /// Fixed offset of minutes.
    #[serde(default)]
    pub minutes: i64,
    /// Fixed offset of seconds.
    #[serde(default)]
    pub seconds: i64,
    /// Fixed offset of microseconds.
    #[serde(default)]
    pub microseconds: i64,
}

impl CalendarDelta {
    /// Creates a zero delta.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the year shift.
    #[must_use]
    pub fn years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    /// Sets the month shift.
    #[must_use]
    pub fn months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    /// Sets the week offset.
    #[must_use]
    pub fn weeks(mut self, weeks: i64) -> Self {
        self.weeks = weeks;
        self
    }

    /// Sets the day offset.
    #[must_use]
    pub fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Sets the hour offset.
    #[must_use]
    pub fn hours(mut self, hours: i64) -> Self {
        self.hours = hours;
        self
    }

    /// Sets the minute offset.
    #[must_use]
    pub fn minutes(mut self, minutes: i64) -> Self {
        self.minutes = minutes;
        self
    }

    /// Sets the second offset.
    #[must_use]
    pub fn seconds(mut self, seconds: i64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Sets the microsecond offset.
    #[must_use]
    pub fn microseconds(mut self, microseconds: i64) -> Self {
        self.microseconds = microseconds;
        self
    }

    /// Checks if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Returns the delta with every component negated.
    ///
    /// This is how decrement is defined: an increment by the negated delta.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            years: -self.years,
            months: -self.months,
            weeks: -self.weeks,
            days: -self.days,
            hours: -self.hours,
            minutes: -self.minutes,
            seconds: -self.seconds,
            microseconds: -self.microseconds,
        }
    }
}

impl Neg for CalendarDelta {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert!(CalendarDelta::new().is_zero());
        assert!(!CalendarDelta::new().days(1).is_zero());
    }

    #[test]
    fn test_builder() {
        let delta = CalendarDelta::new().years(1).months(-2).weeks(3).hours(12);
        assert_eq!(delta.years, 1);
        assert_eq!(delta.months, -2);
        assert_eq!(delta.weeks, 3);
        assert_eq!(delta.hours, 12);
        assert_eq!(delta.seconds, 0);
    }

    #[test]
    fn test_negated_round_trip() {
        let delta = CalendarDelta::new().months(5).days(-10).microseconds(42);
        assert_eq!(delta.negated().negated(), delta);
        assert_eq!(-delta, delta.negated());
        assert_eq!(delta.negated().days, 10);
    }

    #[test]
    fn test_serde_sparse() {
        // Omitted fields deserialize to zero.
        let delta: CalendarDelta = serde_json::from_str(r#"{"months": 1, "days": -3}"#).unwrap();
        assert_eq!(delta, CalendarDelta::new().months(1).days(-3));

        let json = serde_json::to_string(&delta).unwrap();
        let back: CalendarDelta = serde_json::from_str(&json).unwrap();
        assert_eq!(back, delta);
    }
}
