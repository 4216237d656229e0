//! Timezone-aware point in calendar time.

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc,
    Weekday,
};
use chrono_tz::Tz;
use std::fmt;
use std::ops::{Add, Sub};

use crate::constants::{LAST_HOUR, LAST_MINUTE, LAST_SECOND, MICROSECONDS_PER_SECOND};
use crate::error::{TempusError, TempusResult};

/// Date-time formats tried, in order, by free-form parsing.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only formats tried after [`DATETIME_FORMATS`]; midnight is assumed.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %B %Y", "%B %d, %Y"];

/// A timezone-aware point in calendar time with microsecond resolution.
///
/// This is a newtype wrapper around `chrono::DateTime<chrono_tz::Tz>`. All
/// arithmetic produces a new `Instant`; nothing mutates in place. Ordering
/// and equality compare the absolute instant, so two values in different
/// timezones compare equal when they name the same moment.
///
/// # Example
///
/// ```rust
/// use tempus_core::types::Instant;
///
/// let instant = Instant::from_ymd(2025, 6, 15).unwrap();
/// assert_eq!(instant.year(), 2025);
/// assert_eq!(instant.hour(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant(DateTime<Tz>);

impl Instant {
    /// Creates an instant from an existing zoned date-time.
    #[must_use]
    pub fn new(datetime: DateTime<Tz>) -> Self {
        Instant(datetime)
    }

    /// Creates an instant at midnight UTC on the given date.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` if the calendar date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> TempusResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_date)
            .ok_or_else(|| TempusError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates an instant at midnight UTC on the given date.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Instant(Tz::UTC.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
    }

    /// Parses an instant from a string, trying a list of common formats.
    ///
    /// RFC 3339 input keeps its offset (normalized to UTC); naive input is
    /// interpreted as UTC, and date-only input lands at midnight UTC.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when no format matches.
    pub fn parse(s: &str) -> TempusResult<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Instant(dt.with_timezone(&Tz::UTC)));
        }
        for format in DATETIME_FORMATS {
            if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
                log::debug!("free-form parse of {s:?} matched {format:?}");
                return Ok(Instant(Tz::UTC.from_utc_datetime(&ndt)));
            }
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                log::debug!("free-form parse of {s:?} matched {format:?}");
                return Ok(Self::from_date(date));
            }
        }
        Err(TempusError::parse_error(format!(
            "unable to parse date-time string: {s:?}"
        )))
    }

    /// Parses an instant using an explicit strftime-style format.
    ///
    /// The pattern is tried as a zoned date-time (when it carries an offset
    /// directive), then as a naive date-time, then as a date-only pattern.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::Parse` when the input does not match the format.
    pub fn parse_with_format(s: &str, format: &str) -> TempusResult<Self> {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(Instant(dt.with_timezone(&Tz::UTC)));
        }
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(Instant(Tz::UTC.from_utc_datetime(&ndt)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(Self::from_date(date));
        }
        Err(TempusError::parse_error(format!(
            "{s:?} does not match format {format:?}"
        )))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the hour component (0-23).
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute component (0-59).
    #[must_use]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second component (0-59).
    #[must_use]
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the microsecond component (0-999999).
    #[must_use]
    pub fn microsecond(&self) -> u32 {
        self.0.nanosecond() / 1_000
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the ISO weekday number (1 = Monday ... 7 = Sunday).
    #[must_use]
    pub fn iso_weekday(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    /// Returns the timezone.
    #[must_use]
    pub fn timezone(&self) -> Tz {
        self.0.timezone()
    }

    /// Returns the calendar date in the instant's timezone.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns the wall-clock time in the instant's timezone.
    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Returns the underlying zoned date-time.
    #[must_use]
    pub fn datetime(&self) -> DateTime<Tz> {
        self.0
    }

    /// Checks if the instant falls on a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks if the instant falls on a Monday through Friday.
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Checks if the instant's year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        crate::calendar::is_leap_year(self.year())
    }

    /// Returns the number of days in the instant's month, leap-year aware.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        crate::calendar::days_in_month(self.month(), self.year())
            .expect("month of a valid instant is in range")
    }

    /// Returns the number of days in the instant's year (365 or 366).
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Replaces the year, leaving every other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the resulting date does not
    /// exist (e.g. Feb 29 moved to a non-leap year).
    pub fn with_year(&self, year: i32) -> TempusResult<Self> {
        self.0
            .with_year(year)
            .map(Instant)
            .ok_or_else(|| TempusError::invalid_date(format!("cannot set year {year} on {self}")))
    }

    /// Replaces the month, leaving every other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` when the day does not exist in the
    /// target month.
    pub fn with_month(&self, month: u32) -> TempusResult<Self> {
        self.0
            .with_month(month)
            .map(Instant)
            .ok_or_else(|| TempusError::invalid_date(format!("cannot set month {month} on {self}")))
    }

    /// Replaces the day of month, leaving every other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` for days outside the month.
    pub fn with_day(&self, day: u32) -> TempusResult<Self> {
        self.0
            .with_day(day)
            .map(Instant)
            .ok_or_else(|| TempusError::invalid_date(format!("cannot set day {day} on {self}")))
    }

    /// Replaces the hour, leaving every other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` for hours outside 0-23.
    pub fn with_hour(&self, hour: u32) -> TempusResult<Self> {
        self.0
            .with_hour(hour)
            .map(Instant)
            .ok_or_else(|| TempusError::invalid_date(format!("cannot set hour {hour} on {self}")))
    }

    /// Replaces the minute, leaving every other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` for minutes outside 0-59.
    pub fn with_minute(&self, minute: u32) -> TempusResult<Self> {
        self.0.with_minute(minute).map(Instant).ok_or_else(|| {
            TempusError::invalid_date(format!("cannot set minute {minute} on {self}"))
        })
    }

    /// Replaces the second, leaving every other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` for seconds outside 0-59.
    pub fn with_second(&self, second: u32) -> TempusResult<Self> {
        self.0.with_second(second).map(Instant).ok_or_else(|| {
            TempusError::invalid_date(format!("cannot set second {second} on {self}"))
        })
    }

    /// Replaces the microsecond, leaving every other field unchanged.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidDate` for values outside 0-999999.
    pub fn with_microsecond(&self, microsecond: u32) -> TempusResult<Self> {
        if microsecond >= MICROSECONDS_PER_SECOND {
            return Err(TempusError::invalid_date(format!(
                "cannot set microsecond {microsecond} on {self}"
            )));
        }
        self.0
            .with_nanosecond(microsecond * 1_000)
            .map(Instant)
            .ok_or_else(|| {
                TempusError::invalid_date(format!("cannot set microsecond {microsecond} on {self}"))
            })
    }

    /// Replaces the timezone, keeping the wall-clock fields.
    ///
    /// `2021-06-01 09:00 UTC` moved to `America/New_York` becomes
    /// `2021-06-01 09:00 -04:00`: a different absolute instant with the same
    /// local reading. Use [`chrono::DateTime::with_timezone`] on
    /// [`Instant::datetime`] to convert while preserving the instant instead.
    ///
    /// # Errors
    ///
    /// Returns `TempusError::InvalidTimezone` for identifiers not in the IANA
    /// database, and `TempusError::InvalidDate` when the wall-clock reading
    /// does not exist in the target zone (a DST gap).
    pub fn with_timezone(&self, name: &str) -> TempusResult<Self> {
        let tz: Tz = name
            .parse()
            .map_err(|_| TempusError::invalid_timezone(name))?;
        self.0
            .naive_local()
            .and_local_timezone(tz)
            .earliest()
            .map(Instant)
            .ok_or_else(|| {
                TempusError::invalid_date(format!("{} does not exist in {name}", self.0.naive_local()))
            })
    }

    /// Adds a number of calendar days as a fixed 24-hour-per-day offset.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Instant(self.0 + Duration::days(days))
    }

    /// Returns the instant clamped to 00:00:00.000000 on the same day.
    #[must_use]
    pub fn start_of_day(&self) -> Self {
        self.with_date_and_time(self.date(), NaiveTime::MIN)
            .expect("start of day should always be valid")
    }

    /// Returns the instant clamped to 23:59:59.000000 on the same day.
    #[must_use]
    pub fn end_of_day(&self) -> Self {
        self.with_date_and_time(self.date(), last_second_of_day())
            .expect("end of day should always be valid")
    }

    /// Returns the first instant of the month (day 1 at 00:00:00.000000).
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        let first = NaiveDate::from_ymd_opt(self.year(), self.month(), 1)
            .expect("first of month should always be valid");
        self.with_date_and_time(first, NaiveTime::MIN)
            .expect("start of month should always be valid")
    }

    /// Returns the last instant of the month (last day at 23:59:59.000000),
    /// leap-year aware.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        let last = NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
            .expect("end of month should always be valid");
        self.with_date_and_time(last, last_second_of_day())
            .expect("end of month should always be valid")
    }

    /// Returns the first instant of the year (Jan 1 at 00:00:00.000000).
    #[must_use]
    pub fn start_of_year(&self) -> Self {
        let first = NaiveDate::from_ymd_opt(self.year(), 1, 1)
            .expect("first of year should always be valid");
        self.with_date_and_time(first, NaiveTime::MIN)
            .expect("start of year should always be valid")
    }

    /// Returns the last instant of the year (Dec 31 at 23:59:59.000000).
    #[must_use]
    pub fn end_of_year(&self) -> Self {
        let last = NaiveDate::from_ymd_opt(self.year(), 12, 31)
            .expect("last of year should always be valid");
        self.with_date_and_time(last, last_second_of_day())
            .expect("end of year should always be valid")
    }

    /// Rebuilds the instant on the given date and wall-clock time, keeping
    /// the timezone. `None` when the local reading does not exist.
    pub(crate) fn with_date_and_time(&self, date: NaiveDate, time: NaiveTime) -> Option<Self> {
        date.and_time(time)
            .and_local_timezone(self.0.timezone())
            .earliest()
            .map(Instant)
    }
}

/// The last representable whole second of a day.
fn last_second_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(LAST_HOUR, LAST_MINUTE, LAST_SECOND)
        .expect("23:59:59 should always be valid")
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S %Z"))
    }
}

impl From<DateTime<Tz>> for Instant {
    fn from(datetime: DateTime<Tz>) -> Self {
        Instant(datetime)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(datetime: DateTime<Utc>) -> Self {
        Instant(datetime.with_timezone(&Tz::UTC))
    }
}

impl From<Instant> for DateTime<Tz> {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl Add<Duration> for Instant {
    type Output = Self;

    /// Adds a fixed duration.
    fn add(self, duration: Duration) -> Self::Output {
        Instant(self.0 + duration)
    }
}

impl Sub<Duration> for Instant {
    type Output = Self;

    /// Subtracts a fixed duration.
    fn sub(self, duration: Duration) -> Self::Output {
        Instant(self.0 - duration)
    }
}

impl Sub<Instant> for Instant {
    type Output = Duration;

    /// Returns the signed duration between two instants.
    fn sub(self, other: Instant) -> Self::Output {
        self.0 - other.0
    }
}
