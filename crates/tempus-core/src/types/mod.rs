//! Value types for calendar arithmetic.
//!
//! This module provides the core value types:
//!
//! - [`Instant`]: timezone-aware point in calendar time, microsecond resolution
//! - [`CalendarDelta`]: sparse signed unit offsets applied in a fixed order
//! - [`Field`]: tagged settable-field variants for single-field replacement

mod delta;
mod field;
mod instant;

pub use delta::CalendarDelta;
pub use field::Field;
pub use instant::Instant;
