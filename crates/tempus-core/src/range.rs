//! Ranges between two moments.

use std::fmt;

use crate::moment::Moment;
use crate::types::Instant;

/// A starting and ending moment, and everything in between.
///
/// Ordering is not enforced: a range whose `end` precedes its `start` is
/// permitted, reports a negative [`MomentRange::duration_days`], and only
/// contains values by the inverse comparison. Callers that need a validated
/// interval should compare the endpoints themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MomentRange {
    start: Moment,
    end: Moment,
}

impl MomentRange {
    /// Creates a range from two moments.
    #[must_use]
    pub fn new(start: Moment, end: Moment) -> Self {
        MomentRange { start, end }
    }

    /// Creates a range from two instants.
    #[must_use]
    pub fn from_instants(start: Instant, end: Instant) -> Self {
        Self::new(Moment::new(start), Moment::new(end))
    }

    /// Returns the starting moment.
    #[must_use]
    pub fn start(&self) -> &Moment {
        &self.start
    }

    /// Returns the ending moment.
    #[must_use]
    pub fn end(&self) -> &Moment {
        &self.end
    }

    /// Returns the signed whole-day count from start to end, truncating
    /// toward zero. Negative when the endpoints are misordered.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end.current() - self.start.current()).num_days()
    }

    /// Checks if an instant lies within the range, inclusive at both ends.
    #[must_use]
    pub fn includes(&self, instant: Instant) -> bool {
        self.start.current() <= instant && instant <= self.end.current()
    }

    /// Checks if another moment's current value lies within the range.
    #[must_use]
    pub fn includes_moment(&self, moment: &Moment) -> bool {
        self.includes(moment.current())
    }
}

impl fmt::Display for MomentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
