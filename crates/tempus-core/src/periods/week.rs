//! Seven-day frame with a configurable first weekday.

use chrono::{Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Period;
use crate::calendar;
use crate::error::{TempusError, TempusResult};
use crate::moment::Moment;
use crate::traits::{Clock, SystemClock};
use crate::types::{CalendarDelta, Instant};

/// Which day begins a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekStart {
    /// ISO 8601 standard (Monday is day 0 of the week).
    #[default]
    Monday,
    /// US/Canada convention (Sunday is day 0 of the week).
    Sunday,
}

impl WeekStart {
    /// How many days `weekday` is past the week-start day.
    ///
    /// Monday-first counts from Monday (`iso_weekday - 1`); Sunday-first
    /// counts from Sunday (`iso_weekday % 7`). The two configurations place
    /// the boundary differently and are not rotations of each other.
    #[must_use]
    pub fn days_from_start(self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Monday => i64::from(weekday.num_days_from_monday()),
            WeekStart::Sunday => i64::from(weekday.num_days_from_sunday()),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeekStart::Monday => "Monday",
            WeekStart::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

/// A 7-day window containing an anchor instant.
///
/// The frame runs from the most recent occurrence of the configured first
/// weekday on/before the anchor (at 00:00:00.000000) through six days later
/// at 23:59:59.000000.
///
/// # Example
///
/// ```rust
/// use tempus_core::prelude::*;
///
/// // 2021-02-28 is a Sunday; the ISO week containing it starts Monday the 22nd.
/// let week = Week::parse("2021-02-28").unwrap();
/// assert_eq!(week.start().day(), 22);
/// assert_eq!(week.end().day(), 28);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    anchor: Instant,
    week_start: WeekStart,
}

impl Week {
    /// Creates the Monday-first week frame containing the given instant.
    #[must_use]
    pub fn new(anchor: Instant) -> Self {
        Self::with_week_start(anchor, WeekStart::default())
    }

    /// Creates the week frame containing the given instant, starting weeks
    /// on the given day.
    #[must_use]
    pub fn with_week_start(anchor: Instant, week_start: WeekStart) -> Self {
        Week { anchor, week_start }
    }

    /// Creates the week frame containing a moment's current value.
    #[must_use]
    pub fn from_moment(moment: &Moment) -> Self {
        Self::new(moment.current())
    }

    /// Creates the week frame containing the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(Instant::from_date(date))
    }

    /// Creates the week frame for a free-form parseable anchor.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when no known format matches.
    pub fn parse(s: &str) -> TempusResult<Self> {
        Instant::parse(s).map(Self::new)
    }

    /// Creates the week frame for an anchor in an explicit format.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when the input does not match the format.
    pub fn parse_with_format(s: &str, format: &str) -> TempusResult<Self> {
        Instant::parse_with_format(s, format).map(Self::new)
    }

    /// Creates the current week from the system clock.
    #[must_use]
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// Creates the current week of the given clock.
    #[must_use]
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::new(clock.now())
    }

    /// Returns the configured first weekday.
    #[must_use]
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Returns the following week, anchored at its start.
    #[must_use]
    pub fn next(&self) -> Self {
        self.forward(1).expect("adjacent week is always representable")
    }

    /// Returns the preceding week, anchored at its start.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.rewind(1).expect("adjacent week is always representable")
    }

    /// Returns the frame a signed number of weeks away, anchored at its
    /// start. The first-weekday configuration carries over.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the shift leaves the
    /// representable range.
    pub fn forward(&self, weeks: i64) -> TempusResult<Self> {
        let start = self.start();
        let date = start
            .date()
            .checked_add_signed(Duration::days(7 * weeks))
            .ok_or_else(|| {
                TempusError::invalid_date(format!("{weeks} weeks from {start}"))
            })?;
        let anchor = start
            .with_date_and_time(date, NaiveTime::MIN)
            .ok_or_else(|| TempusError::invalid_date(format!("{date} has no midnight")))?;
        Ok(Self::with_week_start(anchor, self.week_start))
    }

    /// Returns the frame a signed number of weeks back; `rewind(n)` is
    /// `forward(-n)`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Week::forward`].
    pub fn rewind(&self, weeks: i64) -> TempusResult<Self> {
        self.forward(-weeks)
    }

    /// Returns the frame reached by applying a full calendar delta to this
    /// frame's start; month and year components clamp exactly like
    /// [`calendar::increment`], and the result re-snaps to its week
    /// boundary. The first-weekday configuration carries over.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the shifted anchor is out of
    /// range.
    pub fn advance(&self, delta: &CalendarDelta) -> TempusResult<Self> {
        calendar::increment(self.start(), delta, 0, &[])
            .map(|anchor| Self::with_week_start(anchor, self.week_start))
    }
}

impl Period for Week {
    fn start(&self) -> Instant {
        let back = self.week_start.days_from_start(self.anchor.weekday());
        let date = self.anchor.date() - Duration::days(back);
        self.anchor
            .with_date_and_time(date, NaiveTime::MIN)
            .expect("start of week should always be valid")
    }

    fn end(&self) -> Instant {
        let date = self.start().date() + Duration::days(6);
        self.anchor
            .with_date_and_time(date, NaiveTime::MIN)
            .expect("end of week should always be valid")
            .end_of_day()
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week of {}", self.start().date())
    }
}
