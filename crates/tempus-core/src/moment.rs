//! Mutable wrapper around a single date-time value.

use chrono::NaiveDate;
use std::fmt;

use crate::calendar;
use crate::error::TempusResult;
use crate::traits::{Clock, SystemClock};
use crate::types::{CalendarDelta, Field, Instant};

/// A date-time with an immutable origin and a mutable current value.
///
/// A `Moment` remembers the instant it was constructed with (`original`) and
/// carries a working value (`current`) that every arithmetic or replacement
/// operation updates in place. The original never changes for the lifetime
/// of the value, which makes it easy to ask "where did this schedule start?"
/// after a chain of adjustments.
///
/// # Example
///
/// ```rust
/// use tempus_core::prelude::*;
///
/// let mut due = Moment::parse("2021-03-01 09:00:00").unwrap();
/// due.increment(&CalendarDelta::new(), 30, &[]).unwrap();
/// assert_eq!(due.current().month(), 4);
/// assert_eq!(due.original().month(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    original: Instant,
    current: Instant,
    /// Mirror of the most recent arithmetic result; tracks `current`.
    ending: Instant,
}

impl Moment {
    /// Creates a moment from an instant.
    #[must_use]
    pub fn new(instant: Instant) -> Self {
        Moment {
            original: instant,
            current: instant,
            ending: instant,
        }
    }

    /// Creates a moment from another moment's current value.
    ///
    /// The new moment starts its own history: its original is the source's
    /// *current* value, not the source's original.
    #[must_use]
    pub fn from_moment(other: &Moment) -> Self {
        Self::new(other.current)
    }

    /// Creates a moment at midnight UTC on the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(Instant::from_date(date))
    }

    /// Creates a moment by free-form string parsing.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when no known format matches.
    pub fn parse(s: &str) -> TempusResult<Self> {
        Instant::parse(s).map(Self::new)
    }

    /// Creates a moment from a string with an explicit strftime-style format.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when the input does not match the format.
    pub fn parse_with_format(s: &str, format: &str) -> TempusResult<Self> {
        Instant::parse_with_format(s, format).map(Self::new)
    }

    /// Creates a moment at the current time from the system clock.
    #[must_use]
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Creates a moment at the current time of the given clock.
    #[must_use]
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(clock.now())
    }

    /// Returns the current value, as affected by every arithmetic and
    /// replacement operation so far.
    #[must_use]
    pub fn current(&self) -> Instant {
        self.current
    }

    /// Returns the value the moment was constructed with. Never changes.
    #[must_use]
    pub fn original(&self) -> Instant {
        self.original
    }

    /// Increments the current value.
    ///
    /// Applies `delta` (calendar-field shift for years/months, fixed
    /// durations for the rest), then steps `business_days` with weekends
    /// skipped for free; see [`calendar::increment`]. Returns the new
    /// current value.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the result is out of range;
    /// the current value keeps its last committed state.
    pub fn increment(
        &mut self,
        delta: &CalendarDelta,
        business_days: i64,
        holidays: &[NaiveDate],
    ) -> TempusResult<Instant> {
        let next = calendar::increment(self.current, delta, business_days, holidays)?;
        self.current = next;
        self.ending = next;
        Ok(next)
    }

    /// Decrements the current value: [`Moment::increment`] with the delta
    /// and business-day count negated.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Moment::increment`].
    pub fn decrement(
        &mut self,
        delta: &CalendarDelta,
        business_days: i64,
        holidays: &[NaiveDate],
    ) -> TempusResult<Instant> {
        self.increment(&delta.negated(), -business_days, holidays)
    }

    /// Alias for [`Moment::increment`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Moment::increment`].
    pub fn fast_forward(
        &mut self,
        delta: &CalendarDelta,
        business_days: i64,
        holidays: &[NaiveDate],
    ) -> TempusResult<Instant> {
        self.increment(delta, business_days, holidays)
    }

    /// Alias for [`Moment::decrement`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Moment::increment`].
    pub fn rewind(
        &mut self,
        delta: &CalendarDelta,
        business_days: i64,
        holidays: &[NaiveDate],
    ) -> TempusResult<Instant> {
        self.decrement(delta, business_days, holidays)
    }

    /// Replaces a single field of the current value.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` for out-of-range component values
    /// and `TempusError::InvalidTimezone` for unknown timezone identifiers;
    /// the current value is untouched on failure.
    pub fn replace(&mut self, field: Field) -> TempusResult<Instant> {
        let next = match field {
            Field::Day(day) => self.current.with_day(day)?,
            Field::Hour(hour) => self.current.with_hour(hour)?,
            Field::Minute(minute) => self.current.with_minute(minute)?,
            Field::Second(second) => self.current.with_second(second)?,
            Field::Microsecond(microsecond) => self.current.with_microsecond(microsecond)?,
            Field::Month(month) => self.current.with_month(month)?,
            Field::Year(year) => self.current.with_year(year)?,
            Field::Timezone(ref name) => self.current.with_timezone(name)?,
        };
        self.current = next;
        Ok(next)
    }

    /// Returns the current day clamped to 00:00:00.000000, without mutating.
    #[must_use]
    pub fn start_of_day(&self) -> Instant {
        self.current.start_of_day()
    }

    /// Returns the current day clamped to 23:59:59.000000, without mutating.
    #[must_use]
    pub fn end_of_day(&self) -> Instant {
        self.current.end_of_day()
    }

    /// Returns the first instant of the current month, without mutating.
    #[must_use]
    pub fn start_of_month(&self) -> Instant {
        self.current.start_of_month()
    }

    /// Returns the last instant of the current month (leap-year aware),
    /// without mutating.
    #[must_use]
    pub fn end_of_month(&self) -> Instant {
        self.current.end_of_month()
    }

    /// Checks if the current value falls on a business day.
    ///
    /// Delegates to [`calendar::is_business_day`], including its documented
    /// treatment of holidays.
    #[must_use]
    pub fn is_business_day(&self, holidays: &[NaiveDate]) -> bool {
        calendar::is_business_day(&self.current, holidays)
    }

    /// Checks if the current value lies within `[start, end]`, inclusive at
    /// both ends.
    #[must_use]
    pub fn in_range(&self, start: Instant, end: Instant) -> bool {
        start <= self.current && self.current <= end
    }

    /// Returns the current value's calendar date.
    #[must_use]
    pub fn to_date(&self) -> NaiveDate {
        self.current.date()
    }
}

impl From<Instant> for Moment {
    fn from(instant: Instant) -> Self {
        Self::new(instant)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}
