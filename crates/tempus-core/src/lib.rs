//! # Tempus Core
//!
//! Calendar-aware date-time arithmetic with business-day stepping and period
//! frames.
//!
//! This crate provides the building blocks for schedule math:
//!
//! - **Types**: [`types::Instant`], [`types::CalendarDelta`], [`types::Field`]
//! - **Calendar Arithmetic**: leap years, month lengths, business-day
//!   stepping ([`calendar`])
//! - **Moments**: an immutable-original/mutable-current date-time wrapper
//!   ([`moment::Moment`])
//! - **Ranges**: containment and duration queries ([`range::MomentRange`])
//! - **Period Frames**: navigable [`periods::Month`], [`periods::Week`] and
//!   [`periods::Year`] windows
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: settable fields and unit offsets are enums/structs,
//!   not stringly-keyed bags
//! - **Explicit Over Implicit**: named factories instead of polymorphic
//!   constructors; "now" comes from an injectable [`traits::Clock`]
//! - **Values In, Values Out**: arithmetic never mutates its inputs
//!
//! ## Example
//!
//! ```rust
//! use tempus_core::prelude::*;
//!
//! // Push a due date out 30 business days.
//! let mut due = Moment::parse("2021-03-01 09:00:00").unwrap();
//! due.increment(&CalendarDelta::new(), 30, &[]).unwrap();
//! assert_eq!(due.current().to_string(), "2021-04-12 09:00:00 UTC");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::if_same_then_else)]
#![allow(clippy::cast_possible_truncation)]

pub mod calendar;
pub mod constants;
pub mod error;
pub mod moment;
pub mod periods;
pub mod range;
pub mod traits;
pub mod types;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendar::{
        days_in_month, decrement, increment, is_business_day, is_holiday, is_leap_year, year_range,
    };
    pub use crate::error::{TempusError, TempusResult};
    pub use crate::moment::Moment;
    pub use crate::periods::{Month, Period, Week, WeekStart, Year};
    pub use crate::range::MomentRange;
    pub use crate::traits::{Clock, FixedClock, SystemClock};
    pub use crate::types::{CalendarDelta, Field, Instant};
}

// Re-export commonly used types at crate root
pub use error::{TempusError, TempusResult};
pub use moment::Moment;
pub use range::MomentRange;
pub use types::{CalendarDelta, Field, Instant};
