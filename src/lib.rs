//! The `gregorian_rs` crate provides value types for points in time and
//! durations under the proleptic Gregorian calendar, with microsecond
//! precision and a fixed valid range of `1582-01-01T00:00:00.000000`
//! through `9999-12-31T23:59:59.999999`.
//!
//! ```rust
//! use gregorian_rs::{Date, Months, Period};
//!
//! let date = Date::new(2012, 4, 30).unwrap();
//! let afternoon = Period::hours(13) + Period::minutes(30);
//!
//! let meeting = date.add(afternoon).unwrap();
//! assert_eq!(meeting.to_string(), "2012-04-30T13:30:00.000000");
//!
//! // Month arithmetic caps the day at the end of the target month.
//! let capped = Date::new(2012, 1, 31).unwrap().add(Months(1)).unwrap();
//! assert_eq!(capped, Date::new(2012, 2, 29).unwrap());
//! ```
//!
//! Both [`Date`] and [`Period`] are immutable, cheaply copyable records
//! over a single signed 64-bit count of microsecond ticks. There is no
//! time zone database, no leap-second modeling, and no calendar other
//! than the Gregorian one; retrieving the wall clock and sleeping are
//! delegated to a [`host::HostClock`] collaborator.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod calendar;
pub mod error;
pub mod host;
pub mod julian;
pub mod parsers;

#[cfg(feature = "sys")]
pub mod sys;

mod date;
mod period;

use core::cmp::Ordering;

#[doc(inline)]
pub use error::GregorianError;

/// The `gregorian_rs` result type.
pub type GregorianResult<T> = Result<T, GregorianError>;

pub use date::{Date, DateSpan, Months, Years};
pub use host::Clock;
pub use period::Period;

#[cfg(feature = "sys")]
pub use sys::SystemClock;

/// A general Sign type.
#[repr(i8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    #[default]
    Positive = 1,
    Zero = 0,
    Negative = -1,
}

impl From<i64> for Sign {
    fn from(value: i64) -> Self {
        match value.cmp(&0) {
            Ordering::Greater => Self::Positive,
            Ordering::Equal => Self::Zero,
            Ordering::Less => Self::Negative,
        }
    }
}

// Relevant numeric constants
/// Microsecond ticks per day: 8.64e+10
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;
/// Microsecond ticks per week.
pub const TICKS_PER_WEEK: i64 = 7 * TICKS_PER_DAY;
/// Microsecond ticks per hour: 3.6e+9
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
/// Microsecond ticks per minute: 6e+7
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
/// Microsecond ticks per second: 1e+6
pub const TICKS_PER_SECOND: i64 = 1_000_000;
/// Microsecond ticks per millisecond.
pub const TICKS_PER_MILLISECOND: i64 = 1_000;

/// Minimum supported year.
pub const MIN_YEAR: i32 = 1582;
/// Maximum supported year.
pub const MAX_YEAR: i32 = 9999;

/// Julian day number of 1582-01-01, the lower range boundary.
pub(crate) const MIN_JULIAN_DAY: i64 = 2_298_874;
/// Julian day number of 9999-12-31, the upper range boundary.
pub(crate) const MAX_JULIAN_DAY: i64 = 5_373_484;

/// Minimum valid `Date` tick value: midnight on 1582-01-01.
pub(crate) const MIN_DATE_TICKS: i64 = MIN_JULIAN_DAY * TICKS_PER_DAY;
/// Maximum valid `Date` tick value: the last microsecond of 9999-12-31.
pub(crate) const MAX_DATE_TICKS: i64 = (MAX_JULIAN_DAY + 1) * TICKS_PER_DAY - 1;
