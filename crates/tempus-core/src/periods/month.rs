//! Calendar-month frame.

use chrono::NaiveDate;
use std::fmt;

use super::Period;
use crate::calendar;
use crate::constants::MONTH_NAMES;
use crate::error::TempusResult;
use crate::moment::Moment;
use crate::traits::{Clock, SystemClock};
use crate::types::{CalendarDelta, Instant};

/// A calendar month containing an anchor instant.
///
/// The frame spans day 1 at 00:00:00.000000 through the last day of the
/// month (leap-year aware) at 23:59:59.000000. The day count is computed
/// once at construction.
///
/// # Example
///
/// ```rust
/// use tempus_core::prelude::*;
///
/// let feb = Month::parse("2020-02-10").unwrap();
/// assert_eq!(feb.days_in_month(), 29);
/// assert_eq!(feb.start().day(), 1);
/// assert_eq!(feb.next().month(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    anchor: Instant,
    days: u32,
}

impl Month {
    /// Creates the month frame containing the given instant.
    #[must_use]
    pub fn new(anchor: Instant) -> Self {
        Month {
            anchor,
            days: anchor.days_in_month(),
        }
    }

    /// Creates the month frame containing a moment's current value.
    #[must_use]
    pub fn from_moment(moment: &Moment) -> Self {
        Self::new(moment.current())
    }

    /// Creates the month frame containing the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(Instant::from_date(date))
    }

    /// Creates the month frame for a free-form parseable anchor.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when no known format matches.
    pub fn parse(s: &str) -> TempusResult<Self> {
        Instant::parse(s).map(Self::new)
    }

    /// Creates the month frame for an anchor in an explicit format.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when the input does not match the format.
    pub fn parse_with_format(s: &str, format: &str) -> TempusResult<Self> {
        Instant::parse_with_format(s, format).map(Self::new)
    }

    /// Creates the current month from the system clock.
    #[must_use]
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Creates the current month of the given clock.
    #[must_use]
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(clock.now())
    }

    /// Returns the year of the frame.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.anchor.year()
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.anchor.month()
    }

    /// Returns the English month name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month() - 1) as usize]
    }

    /// Returns the number of days in the frame, leap-year aware.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    /// Returns the following month, anchored at its start.
    #[must_use]
    pub fn next(&self) -> Self {
        self.forward(1).expect("adjacent month is always representable")
    }

    /// Returns the preceding month, anchored at its start.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.rewind(1).expect("adjacent month is always representable")
    }

    /// Returns the frame a signed number of months away, anchored at its
    /// start.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the shift leaves the
    /// representable range.
    pub fn forward(&self, months: i32) -> TempusResult<Self> {
        calendar::shift_months(self.start(), i64::from(months)).map(Self::new)
    }

    /// Returns the frame a signed number of months back; `rewind(n)` is
    /// `forward(-n)`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Month::forward`].
    pub fn rewind(&self, months: i32) -> TempusResult<Self> {
        self.forward(-months)
    }

    /// Returns the frame reached by applying a full calendar delta to this
    /// frame's start; mixed units (extra years, days, ...) clamp exactly
    /// like [`calendar::increment`].
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the shifted anchor is out of
    /// range.
    pub fn advance(&self, delta: &CalendarDelta) -> TempusResult<Self> {
        calendar::increment(self.start(), delta, 0, &[]).map(Self::new)
    }
}

impl Period for Month {
    fn start(&self) -> Instant {
        self.anchor.start_of_month()
    }

    fn end(&self) -> Instant {
        self.anchor.end_of_month()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::FixedClock;

    fn month(s: &str) -> Month {
        Month::parse(s).unwrap()
    }

    #[test]
    fn test_boundaries() {
        let feb = month("2021-02-28 11:30:00");
        let start = feb.start();
        assert_eq!((start.day(), start.hour(), start.minute()), (1, 0, 0));
        assert_eq!(start.microsecond(), 0);

        let end = feb.end();
        assert_eq!(end.day(), 28);
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
    }

    #[test]
    fn test_leap_year_metadata() {
        assert_eq!(month("2020-02-10").days_in_month(), 29);
        assert_eq!(month("2021-02-10").days_in_month(), 28);
        assert_eq!(month("2020-02-10").end().day(), 29);
    }

    #[test]
    fn test_next_and_previous() {
        let jan = month("2021-01-15 08:00:00");
        let feb = jan.next();
        assert_eq!((feb.year(), feb.month()), (2021, 2));
        // New frames are anchored at their start.
        assert_eq!(feb.start().day(), 1);

        let dec = jan.previous();
        assert_eq!((dec.year(), dec.month()), (2020, 12));
    }

    #[test]
    fn test_forward_and_rewind() {
        let nov = month("2021-11-05");
        let feb = nov.forward(3).unwrap();
        assert_eq!((feb.year(), feb.month()), (2022, 2));

        let aug = nov.rewind(3).unwrap();
        assert_eq!((aug.year(), aug.month()), (2021, 8));
    }

    #[test]
    fn test_advance_mixed_units() {
        let jan = month("2021-01-20");
        let shifted = jan.advance(&CalendarDelta::new().years(1).months(1)).unwrap();
        assert_eq!((shifted.year(), shifted.month()), (2022, 2));
    }

    #[test]
    fn test_contains() {
        let feb = month("2021-02-10");
        assert!(feb.contains(Instant::parse("2021-02-28 23:59:59").unwrap()));
        assert!(feb.contains(feb.start()));
        assert!(!feb.contains(Instant::parse("2021-03-01 00:00:00").unwrap()));
    }

    #[test]
    fn test_constructors_agree() {
        let pinned = Instant::parse("2021-06-15 09:30:00").unwrap();
        let from_clock = Month::now_with(&FixedClock::new(pinned));
        let from_moment = Month::from_moment(&Moment::new(pinned));
        assert_eq!(from_clock, from_moment);
        assert_eq!(from_clock.month(), 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(month("2021-02-10").to_string(), "February 2021");
    }
}
