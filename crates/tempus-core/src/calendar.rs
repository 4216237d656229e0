//! Calendar arithmetic.
//!
//! The algorithmic core of the library:
//!
//! - [`is_leap_year`] / [`days_in_month`]: Gregorian month-length facts
//! - [`is_holiday`] / [`is_business_day`]: weekday and holiday predicates
//! - [`increment`] / [`decrement`]: calendar-delta application plus
//!   business-day stepping
//!
//! Everything here is a pure function over value types; the stateful
//! [`crate::moment::Moment`] wrapper and the period frames delegate to this
//! module.

use chrono::{Duration, NaiveDate};

use crate::constants::{DAYS_PER_MONTH, MONTHS_PER_YEAR};
use crate::error::{TempusError, TempusResult};
use crate::types::{CalendarDelta, Instant};

/// Checks if a year is a leap year under the Gregorian rule.
#[must_use]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a month, leap-year aware.
///
/// # Errors
///
/// Returns `TempusError::InvalidMonth` for months outside 1-12.
pub fn days_in_month(month: u32, year: i32) -> TempusResult<u32> {
    if month < 1 || month > MONTHS_PER_YEAR {
        return Err(TempusError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[(month - 1) as usize])
}

/// Checks if a date appears in the holiday list.
///
/// An empty list means "no holidays" and is never an error.
#[must_use]
pub fn is_holiday(date: NaiveDate, holidays: &[NaiveDate]) -> bool {
    holidays.contains(&date)
}

/// Checks if an instant falls on a business day.
///
/// Saturdays and Sundays are never business days. Holiday membership does
/// not currently demote a weekday: a Monday-Friday date is reported as a
/// business day even when it appears in `holidays`. Callers that need
/// holiday-aware scheduling should combine this with [`is_holiday`].
#[must_use]
pub fn is_business_day(instant: &Instant, holidays: &[NaiveDate]) -> bool {
    if instant.is_weekend() {
        return false;
    }

    if is_holiday(instant.date(), holidays) {
        return true;
    }

    true
}

/// Increments an instant by a calendar delta, then by a business-day count.
///
/// The delta is applied first: years and months as a single calendar-field
/// shift with the day of month clamped to the target month's length
/// (Jan 31 + 1 month lands on Feb 28/29, never Mar 3), then weeks, days,
/// hours, minutes, seconds and microseconds as fixed-duration offsets.
///
/// `business_days` then steps one calendar day at a time in its sign's
/// direction; only steps landing on a business day (per [`is_business_day`])
/// consume the remaining count, so weekends are skipped for free.
///
/// # Non-termination
///
/// When the supplied configuration makes every reachable day a non-business
/// day, the stepping loop never returns. Callers must supply a finite,
/// realistic calendar; no runtime guard is applied.
///
/// # Errors
///
/// Returns `TempusError::InvalidDate` when the shifted result is outside the
/// representable range.
pub fn increment(
    instant: Instant,
    delta: &CalendarDelta,
    business_days: i64,
    holidays: &[NaiveDate],
) -> TempusResult<Instant> {
    let months = i64::from(delta.years) * 12 + i64::from(delta.months);
    let mut result = shift_months(instant, months)?;

    let offset = fixed_offset(delta)
        .ok_or_else(|| TempusError::invalid_date("calendar delta out of range"))?;
    result = result
        .datetime()
        .checked_add_signed(offset)
        .map(Instant::new)
        .ok_or_else(|| TempusError::invalid_date(format!("{instant} + {delta:?} overflows")))?;

    if business_days != 0 {
        let direction = business_days.signum();
        let mut remaining = business_days;
        while remaining != 0 {
            loop {
                result = result.add_days(direction);
                if is_business_day(&result, holidays) {
                    break;
                }
            }
            remaining -= direction;
        }
        log::trace!("stepped {business_days} business day(s) to {result}");
    }

    Ok(result)
}

/// Decrements an instant: [`increment`] with every delta component and the
/// business-day count negated. Not a separate algorithm.
///
/// # Errors
///
/// Same conditions as [`increment`].
pub fn decrement(
    instant: Instant,
    delta: &CalendarDelta,
    business_days: i64,
    holidays: &[NaiveDate],
) -> TempusResult<Instant> {
    increment(instant, &delta.negated(), -business_days, holidays)
}

/// Returns every year from `start` through `end`, inclusive.
///
/// Empty when `end` precedes `start`. Callers wanting "through the current
/// year" pass an explicit end, e.g. `SystemClock.now().year()`.
#[must_use]
pub fn year_range(start: i32, end: i32) -> Vec<i32> {
    (start..=end).collect()
}

/// Shifts an instant by whole calendar months, clamping the day of month to
/// the target month's length. Wall-clock time and timezone are kept.
pub(crate) fn shift_months(instant: Instant, months: i64) -> TempusResult<Instant> {
    if months == 0 {
        return Ok(instant);
    }

    let total = i64::from(instant.year()) * 12 + i64::from(instant.month()) - 1 + months;
    let year = i32::try_from(total.div_euclid(12))
        .map_err(|_| TempusError::invalid_date(format!("{months} months from {instant}")))?;
    let month = (total.rem_euclid(12) + 1) as u32;

    let day = instant.day().min(days_in_month(month, year)?);
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TempusError::invalid_date(format!("{year}-{month:02}-{day:02}")))?;

    instant
        .with_date_and_time(date, instant.time())
        .ok_or_else(|| TempusError::invalid_date(format!("{date} {} does not exist", instant.time())))
}

/// Sums the fixed-duration components of a delta. `None` on overflow.
fn fixed_offset(delta: &CalendarDelta) -> Option<Duration> {
    let mut total = Duration::try_weeks(delta.weeks)?;
    total = total.checked_add(&Duration::try_days(delta.days)?)?;
    total = total.checked_add(&Duration::try_hours(delta.hours)?)?;
    total = total.checked_add(&Duration::try_minutes(delta.minutes)?)?;
    total = total.checked_add(&Duration::try_seconds(delta.seconds)?)?;
    total.checked_add(&Duration::microseconds(delta.microseconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant(s: &str) -> Instant {
        Instant::parse(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2019));
        assert!(is_leap_year(2020));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, 2021).unwrap(), 31);
        assert_eq!(days_in_month(4, 2021).unwrap(), 30);
        assert_eq!(days_in_month(2, 2021).unwrap(), 28);
        assert_eq!(days_in_month(2, 2020).unwrap(), 29);
    }

    #[test]
    fn test_days_in_month_rejects_bad_months() {
        assert_eq!(
            days_in_month(0, 2021),
            Err(TempusError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            days_in_month(13, 2021),
            Err(TempusError::InvalidMonth { month: 13 })
        );
    }

    #[test]
    fn test_february_tracks_leap_years() {
        for year in 1900..2100 {
            let expected = if is_leap_year(year) { 29 } else { 28 };
            assert_eq!(days_in_month(2, year).unwrap(), expected);
        }
    }

    #[test]
    fn test_is_business_day_weekends() {
        // 2021-02-26 is a Friday, 27th Saturday, 28th Sunday
        assert!(is_business_day(&instant("2021-02-26 13:14:00"), &[]));
        assert!(!is_business_day(&instant("2021-02-27 13:14:00"), &[]));
        assert!(!is_business_day(&instant("2021-02-28 13:14:00"), &[]));
        assert!(is_business_day(&instant("2021-03-01"), &[]));
    }

    #[test]
    fn test_holidays_do_not_demote_weekdays() {
        // 2021-01-01 is a Friday and on the list; the predicate still
        // reports a business day. See the function docs.
        let holidays = vec![date("2020-12-25"), date("2021-01-01")];
        assert!(is_business_day(&instant("2021-01-01 11:30:00"), &holidays));
        assert!(is_holiday(date("2021-01-01"), &holidays));
        assert!(!is_holiday(date("2021-01-04"), &holidays));
    }

    #[test]
    fn test_increment_identity() {
        let start = instant("2021-02-28 11:30:00");
        let same = increment(start, &CalendarDelta::new(), 0, &[]).unwrap();
        assert_eq!(same, start);
    }

    #[test]
    fn test_month_shift_clamps_day() {
        let jan31 = instant("2021-01-31 11:30:00");
        let feb = increment(jan31, &CalendarDelta::new().months(1), 0, &[]).unwrap();
        assert_eq!((feb.month(), feb.day()), (2, 28));
        // Wall-clock time is untouched by the field shift.
        assert_eq!((feb.hour(), feb.minute()), (11, 30));

        let leap = increment(instant("2020-01-31"), &CalendarDelta::new().months(1), 0, &[]).unwrap();
        assert_eq!((leap.month(), leap.day()), (2, 29));
    }

    #[test]
    fn test_month_shift_backwards_across_year() {
        let jan15 = instant("2021-01-15");
        let dec = increment(jan15, &CalendarDelta::new().months(-1), 0, &[]).unwrap();
        assert_eq!((dec.year(), dec.month(), dec.day()), (2020, 12, 15));

        let back_14 = increment(jan15, &CalendarDelta::new().months(-14), 0, &[]).unwrap();
        assert_eq!((back_14.year(), back_14.month()), (2019, 11));
    }

    #[test]
    fn test_years_and_months_combine() {
        let start = instant("2020-02-29 08:00:00");
        let shifted = increment(start, &CalendarDelta::new().years(1).months(1), 0, &[]).unwrap();
        // 13 months out of Feb 29: lands in March, day preserved.
        assert_eq!((shifted.year(), shifted.month(), shifted.day()), (2021, 3, 29));

        let year_only = increment(start, &CalendarDelta::new().years(1), 0, &[]).unwrap();
        assert_eq!((year_only.year(), year_only.month(), year_only.day()), (2021, 2, 28));
    }

    #[test]
    fn test_fixed_duration_units() {
        let start = instant("2021-01-01 00:00:00");
        let delta = CalendarDelta::new().weeks(1).days(2).hours(3).minutes(4).seconds(5);
        let shifted = increment(start, &delta, 0, &[]).unwrap();
        assert_eq!(shifted.day(), 10);
        assert_eq!((shifted.hour(), shifted.minute(), shifted.second()), (3, 4, 5));

        let micros = increment(start, &CalendarDelta::new().microseconds(1_500_000), 0, &[]).unwrap();
        assert_eq!(micros.second(), 1);
        assert_eq!(micros.microsecond(), 500_000);
    }

    #[test]
    fn test_business_days_skip_weekends() {
        // Friday + 1 business day = Monday
        let friday = instant("2021-02-26");
        let monday = increment(friday, &CalendarDelta::new(), 1, &[]).unwrap();
        assert_eq!((monday.month(), monday.day()), (3, 1));

        // Monday + 5 business days = next Monday
        let next = increment(instant("2021-03-01"), &CalendarDelta::new(), 5, &[]).unwrap();
        assert_eq!(next.day(), 8);
    }

    #[test]
    fn test_business_days_backwards() {
        // Sunday 2021-02-28 back 5 business days: the Feb 27-28 weekend is
        // free, landing on Monday the 22nd.
        let sunday = instant("2021-02-28");
        let result = increment(sunday, &CalendarDelta::new(), -5, &[]).unwrap();
        assert_eq!(result.day(), 22);
    }

    #[test]
    fn test_delta_applies_before_business_days() {
        // 2021-01-01 +1 month = Feb 1 (Monday), then +1 business day = Feb 2.
        let start = instant("2021-01-01");
        let result = increment(start, &CalendarDelta::new().months(1), 1, &[]).unwrap();
        assert_eq!((result.month(), result.day()), (2, 2));
    }

    #[test]
    fn test_decrement_is_negated_increment() {
        let start = instant("2021-06-15 10:00:00");
        let delta = CalendarDelta::new().months(2).days(3).hours(4);
        let forward = increment(start, &delta, 0, &[]).unwrap();
        let back = decrement(forward, &delta, 0, &[]).unwrap();
        assert_eq!(back, start);

        let fwd_bd = increment(start, &CalendarDelta::new(), 3, &[]).unwrap();
        let back_bd = decrement(fwd_bd, &CalendarDelta::new(), 3, &[]).unwrap();
        assert_eq!(back_bd, start);
    }

    #[test]
    fn test_year_range() {
        let years = year_range(2015, 2019);
        assert_eq!(years.first(), Some(&2015));
        assert_eq!(years.last(), Some(&2019));
        assert_eq!(years.len(), 5);

        assert!(year_range(2020, 2019).is_empty());
    }

    #[test]
    fn test_shift_months_zero_is_identity() {
        let start = instant("2021-03-31 23:59:59");
        assert_eq!(shift_months(start, 0).unwrap(), start);
    }
}
