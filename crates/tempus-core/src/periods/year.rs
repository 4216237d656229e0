//! Calendar-year frame.

use chrono::NaiveDate;
use std::fmt;

use super::Period;
use crate::calendar;
use crate::error::TempusResult;
use crate::moment::Moment;
use crate::traits::{Clock, SystemClock};
use crate::types::{CalendarDelta, Instant};

/// A calendar year containing an anchor instant.
///
/// Spans January 1 at 00:00:00.000000 through December 31 at
/// 23:59:59.000000. The leap flag and total day count are computed once at
/// construction.
///
/// # Example
///
/// ```rust
/// use tempus_core::prelude::*;
///
/// let year = Year::parse("2020-06-15").unwrap();
/// assert!(year.is_leap_year());
/// assert_eq!(year.total_days(), 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year {
    anchor: Instant,
    leap: bool,
    total_days: u32,
}

impl Year {
    /// Creates the year frame containing the given instant.
    #[must_use]
    pub fn new(anchor: Instant) -> Self {
        let leap = calendar::is_leap_year(anchor.year());
        Year {
            anchor,
            leap,
            total_days: if leap { 366 } else { 365 },
        }
    }

    /// Creates the year frame containing a moment's current value.
    #[must_use]
    pub fn from_moment(moment: &Moment) -> Self {
        Self::new(moment.current())
    }

    /// Creates the year frame containing the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(Instant::from_date(date))
    }

    /// Creates the year frame for a free-form parseable anchor.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when no known format matches.
    pub fn parse(s: &str) -> TempusResult<Self> {
        Instant::parse(s).map(Self::new)
    }

    /// Creates the year frame for an anchor in an explicit format.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when the input does not match the format.
    pub fn parse_with_format(s: &str, format: &str) -> TempusResult<Self> {
        Instant::parse_with_format(s, format).map(Self::new)
    }

    /// Creates the current year from the system clock.
    #[must_use]
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Creates the current year of the given clock.
    #[must_use]
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(clock.now())
    }

    /// Returns the year number.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.anchor.year()
    }

    /// Checks if the frame is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.leap
    }

    /// Returns the total number of days in the frame (365 or 366).
    #[must_use]
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Returns the following year, anchored at its start.
    #[must_use]
    pub fn next(&self) -> Self {
        self.forward(1).expect("adjacent year is always representable")
    }

    /// Returns the preceding year, anchored at its start.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.rewind(1).expect("adjacent year is always representable")
    }

    /// Returns the frame a signed number of years away, anchored at its
    /// start.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the shift leaves the
    /// representable range.
    pub fn forward(&self, years: i32) -> TempusResult<Self> {
        calendar::shift_months(self.start(), i64::from(years) * 12).map(Self::new)
    }

    /// Returns the frame a signed number of years back; `rewind(n)` is
    /// `forward(-n)`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Year::forward`].
    pub fn rewind(&self, years: i32) -> TempusResult<Self> {
        self.forward(-years)
    }

    /// Returns the frame reached by applying a full calendar delta to this
    /// frame's start, clamping exactly like [`calendar::increment`].
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the shifted anchor is out of
    /// range.
    pub fn advance(&self, delta: &CalendarDelta) -> TempusResult<Self> {
        calendar::increment(self.start(), delta, 0, &[]).map(Self::new)
    }
}

impl Period for Year {
    fn start(&self) -> Instant {
        self.anchor.start_of_year()
    }

    fn end(&self) -> Instant {
        self.anchor.end_of_year()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}
