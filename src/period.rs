//! This module implements `Period` and its operations.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Euclid;

use crate::{
    parsers::{parse_period, FormattablePeriod},
    GregorianResult, Sign, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE,
    TICKS_PER_SECOND, TICKS_PER_WEEK,
};

/// `Period` is a signed duration with microsecond precision.
///
/// The sole state is a signed 64-bit count of microsecond ticks; every
/// derived part and every arithmetic result is computed from it. Values
/// are immutable, and all operations yield new values.
///
/// ```rust
/// use gregorian_rs::Period;
///
/// let p = Period::hours(13) + Period::minutes(30);
/// assert_eq!(p.to_string(), "13:30:00.000000");
/// assert_eq!(Period::minutes(1), Period::seconds(60));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Period {
    ticks: i64,
}

// ==== Period constructors ====

impl Period {
    /// Creates a `Period` from hour, minute, second, and microsecond
    /// components.
    ///
    /// Each component is independently signed and unrestricted in
    /// magnitude; the components are summed, not cross-checked.
    #[must_use]
    pub const fn new(hours: i64, minutes: i64, seconds: i64, microseconds: i64) -> Self {
        Self {
            ticks: hours * TICKS_PER_HOUR
                + minutes * TICKS_PER_MINUTE
                + seconds * TICKS_PER_SECOND
                + microseconds,
        }
    }

    /// Creates a `Period` from a raw tick count.
    #[inline]
    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self { ticks }
    }

    /// Creates a `Period` of the given number of weeks.
    #[must_use]
    pub const fn weeks(weeks: i64) -> Self {
        Self::from_ticks(weeks * TICKS_PER_WEEK)
    }

    /// Creates a `Period` of the given number of days.
    #[must_use]
    pub const fn days(days: i64) -> Self {
        Self::from_ticks(days * TICKS_PER_DAY)
    }

    /// Creates a `Period` of the given number of hours.
    #[must_use]
    pub const fn hours(hours: i64) -> Self {
        Self::from_ticks(hours * TICKS_PER_HOUR)
    }

    /// Creates a `Period` of the given number of minutes.
    #[must_use]
    pub const fn minutes(minutes: i64) -> Self {
        Self::from_ticks(minutes * TICKS_PER_MINUTE)
    }

    /// Creates a `Period` of the given number of seconds.
    #[must_use]
    pub const fn seconds(seconds: i64) -> Self {
        Self::from_ticks(seconds * TICKS_PER_SECOND)
    }

    /// Creates a `Period` of the given number of milliseconds.
    #[must_use]
    pub const fn milliseconds(milliseconds: i64) -> Self {
        Self::from_ticks(milliseconds * TICKS_PER_MILLISECOND)
    }

    /// Creates a `Period` of the given number of microseconds.
    #[must_use]
    pub const fn microseconds(microseconds: i64) -> Self {
        Self::from_ticks(microseconds)
    }
}

// ==== Period accessors ====

impl Period {
    /// Returns the raw tick count.
    #[inline]
    #[must_use]
    pub const fn as_ticks(&self) -> i64 {
        self.ticks
    }

    /// Returns the sign of this `Period`.
    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        Sign::from(self.ticks)
    }

    /// Returns whether this `Period` is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.ticks == 0
    }

    /// Returns whether this `Period` is negative.
    #[inline]
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.ticks < 0
    }

    /// Returns the absolute value of this `Period`.
    #[inline]
    #[must_use]
    pub const fn abs(&self) -> Self {
        Self::from_ticks(self.ticks.abs())
    }

    /// Decomposes this `Period` into (hours, minutes, seconds,
    /// microseconds) of its absolute value.
    ///
    /// The parts satisfy `hours * 3_600_000_000 + minutes * 60_000_000 +
    /// seconds * 1_000_000 + microseconds == ticks.abs()`. The sign is
    /// not distributed over the parts; it is reported once by
    /// [`Period::sign`] and rendered once by the canonical text form.
    #[must_use]
    pub fn parts(&self) -> (i64, u8, u8, u32) {
        let magnitude = self.ticks.unsigned_abs();
        let (seconds, microseconds) = magnitude.div_rem_euclid(&(TICKS_PER_SECOND as u64));
        let (minutes, seconds) = seconds.div_rem_euclid(&60);
        let (hours, minutes) = minutes.div_rem_euclid(&60);
        (hours as i64, minutes as u8, seconds as u8, microseconds as u32)
    }

    /// Returns the whole-hours part of the absolute value.
    #[must_use]
    pub fn hours_part(&self) -> i64 {
        (self.ticks.unsigned_abs() / TICKS_PER_HOUR as u64) as i64
    }

    /// Returns the minutes part of the absolute value, in [0, 59].
    #[must_use]
    pub fn minutes_part(&self) -> u8 {
        ((self.ticks.unsigned_abs() / TICKS_PER_MINUTE as u64) % 60) as u8
    }

    /// Returns the seconds part of the absolute value, in [0, 59].
    #[must_use]
    pub fn seconds_part(&self) -> u8 {
        ((self.ticks.unsigned_abs() / TICKS_PER_SECOND as u64) % 60) as u8
    }

    /// Returns the microseconds part of the absolute value, in
    /// [0, 999_999].
    #[must_use]
    pub fn microseconds_part(&self) -> u32 {
        (self.ticks.unsigned_abs() % TICKS_PER_SECOND as u64) as u32
    }
}

// ==== Period operator impls ====

impl Add for Period {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_ticks(self.ticks + rhs.ticks)
    }
}

impl Sub for Period {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_ticks(self.ticks - rhs.ticks)
    }
}

impl Neg for Period {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_ticks(-self.ticks)
    }
}

impl Mul<i64> for Period {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self::from_ticks(self.ticks * rhs)
    }
}

impl Mul<Period> for i64 {
    type Output = Period;

    fn mul(self, rhs: Period) -> Period {
        rhs * self
    }
}

/// Integer tick division, truncating toward zero.
impl Div<i64> for Period {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        Self::from_ticks(self.ticks / rhs)
    }
}

/// The ratio of two periods as a floating value.
///
/// This is an approximation and is not reversible.
impl Div<Period> for Period {
    type Output = f64;

    fn div(self, rhs: Period) -> f64 {
        self.ticks as f64 / rhs.ticks as f64
    }
}

// ==== Trait impls ====

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use writeable::Writeable;
        FormattablePeriod::from(*self).write_to(f)
    }
}

impl core::str::FromStr for Period {
    type Err = crate::GregorianError;

    fn from_str(s: &str) -> GregorianResult<Self> {
        parse_period(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constructors_agree_on_ticks() {
        assert_eq!(Period::weeks(1), Period::days(7));
        assert_eq!(Period::days(1), Period::hours(24));
        assert_eq!(Period::hours(1), Period::minutes(60));
        assert_eq!(Period::minutes(1), Period::seconds(60));
        assert_eq!(Period::seconds(1), Period::milliseconds(1000));
        assert_eq!(Period::milliseconds(1), Period::microseconds(1000));
    }

    #[test]
    fn comparison_is_on_raw_ticks() {
        assert_eq!(Period::minutes(1), Period::seconds(60));
        assert!(Period::minutes(1) > Period::seconds(59));
        assert!(Period::seconds(-1) < Period::default());
        assert!(Period::new(0, 0, 0, 1) > Period::default());
    }

    #[test]
    fn addition_is_commutative() {
        let a = Period::hours(13);
        let b = Period::minutes(30);
        assert_eq!(a + b, b + a);
        assert_eq!((a + b).as_ticks(), 48_600_000_000);
    }

    #[test]
    fn negation_is_involutive() {
        let p = Period::new(1, 2, 3, 4);
        assert_eq!(-(-p), p);
        assert_eq!((-p).as_ticks(), -p.as_ticks());
        assert_eq!(-Period::default(), Period::default());
    }

    #[test]
    fn scalar_multiplication_both_orders() {
        let p = Period::minutes(90);
        assert_eq!(p * 2, Period::hours(3));
        assert_eq!(2 * p, Period::hours(3));
        assert_eq!(p * -1, -p);
    }

    #[test]
    fn division_truncates() {
        assert_eq!(Period::seconds(3) / 2, Period::milliseconds(1500));
        assert_eq!(Period::microseconds(3) / 2, Period::microseconds(1));
        assert_eq!(Period::microseconds(-3) / 2, Period::microseconds(-1));
    }

    #[test]
    fn period_ratio() {
        assert_eq!(Period::hours(1) / Period::minutes(30), 2.0);
        assert_eq!(Period::minutes(30) / Period::hours(1), 0.5);
    }

    #[test]
    fn parts_of_negative_period_are_absolute() {
        let p = -Period::new(1, 2, 3, 4);
        assert_eq!(p.parts(), (1, 2, 3, 4));
        assert_eq!(p.sign(), Sign::Negative);
        assert_eq!(p.hours_part(), 1);
        assert_eq!(p.minutes_part(), 2);
        assert_eq!(p.seconds_part(), 3);
        assert_eq!(p.microseconds_part(), 4);
    }

    #[test]
    fn parts_recompose_for_non_negative_ticks() {
        let p = Period::new(30, 61, 62, 1_000_001);
        let (h, m, s, us) = p.parts();
        assert_eq!(
            h * TICKS_PER_HOUR
                + i64::from(m) * TICKS_PER_MINUTE
                + i64::from(s) * TICKS_PER_SECOND
                + i64::from(us),
            p.as_ticks()
        );
        assert!(m < 60 && s < 60 && us < 1_000_000);
    }
}
