//! Core traits for the Tempus library.
//!
//! This module defines the seams the rest of the crate abstracts over:
//!
//! - [`Clock`]: source of "now" for default-anchored construction
//!
//! Constructors that default to the current time ([`crate::moment::Moment::now`],
//! the period-frame `now` factories) go through a `Clock` rather than reading
//! the system clock directly, so tests can pin time with [`FixedClock`].

use chrono::Utc;
use chrono_tz::Tz;

use crate::types::Instant;

/// Source of the current instant.
///
/// Implementations must be cheap to call repeatedly; every `now()`-style
/// constructor invokes this exactly once.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

/// The real system clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::new(Utc::now().with_timezone(&Tz::UTC))
    }
}

/// A clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(Instant);

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    #[must_use]
    pub fn new(instant: Instant) -> Self {
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}
