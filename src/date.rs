//! This module implements `Date` and its calendar arithmetic.

use core::fmt;
use core::ops::Sub;

use crate::{
    calendar,
    julian::{julian_from_ymd, ymd_from_julian},
    parsers::{parse_date, FormattableDate},
    period::Period,
    GregorianError, GregorianResult, MAX_DATE_TICKS, MIN_DATE_TICKS, TICKS_PER_DAY,
};

/// A signed month shift amount for [`Date`] arithmetic.
///
/// `Months` carries no tick semantics; it is only meaningful as the
/// right-hand operand of [`Date::add`] and [`Date::subtract`], where it
/// shifts the calendar month component with day-capping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Months(pub i32);

/// A signed year shift amount for [`Date`] arithmetic.
///
/// Like [`Months`], this is a shift amount rather than a duration and
/// cannot be compared with or combined into a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Years(pub i32);

/// The closed set of right-hand operands of `Date` addition and
/// subtraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateSpan {
    /// A tick-wise shift.
    Period(Period),
    /// A calendar month shift with day-capping.
    Months(Months),
    /// A calendar year shift with day-capping.
    Years(Years),
}

impl From<Period> for DateSpan {
    fn from(value: Period) -> Self {
        Self::Period(value)
    }
}

impl From<Months> for DateSpan {
    fn from(value: Months) -> Self {
        Self::Months(value)
    }
}

impl From<Years> for DateSpan {
    fn from(value: Years) -> Self {
        Self::Years(value)
    }
}

/// `Date` is a point in time under the proleptic Gregorian calendar.
///
/// The sole state is a signed 64-bit count of microsecond ticks since
/// the Julian-period epoch, i.e. Julian day number × 86,400,000,000
/// plus the period-of-day. Every represented instant lies in the closed
/// range `1582-01-01T00:00:00.000000` through
/// `9999-12-31T23:59:59.999999`, and every constructive operation
/// re-validates that invariant.
///
/// ```rust
/// use gregorian_rs::{Date, Period};
///
/// let d = Date::new(2012, 4, 30).unwrap();
/// assert_eq!(d.to_string(), "2012-04-30T00:00:00.000000");
///
/// let later = d.add(Period::hours(13) + Period::minutes(30)).unwrap();
/// assert_eq!(later - d, Period::hours(13) + Period::minutes(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    ticks: i64,
}

// ==== Date constructors ====

impl Date {
    /// Creates a `Date` at midnight of the given calendar day.
    ///
    /// # Errors
    ///   - `RangeError` if the year is outside [1582, 9999] or the
    ///     month outside [1, 12].
    ///   - `ValidationError` if the day is invalid for the month.
    pub fn new(year: i32, month: u8, day: u8) -> GregorianResult<Self> {
        calendar::validate_year(year)?;
        calendar::validate_day(year, month, day)?;
        Self::from_ticks(julian_from_ymd(year, month, day) * TICKS_PER_DAY)
    }

    /// Creates a `Date` from a raw tick count, validating the range
    /// invariant.
    pub fn from_ticks(ticks: i64) -> GregorianResult<Self> {
        if !(MIN_DATE_TICKS..=MAX_DATE_TICKS).contains(&ticks) {
            return Err(GregorianError::range()
                .with_message("date is outside the supported range (1582-01-01 to 9999-12-31)"));
        }
        Ok(Self { ticks })
    }
}

// ==== Date accessors ====

impl Date {
    /// Returns the raw tick count.
    #[inline]
    #[must_use]
    pub const fn as_ticks(&self) -> i64 {
        self.ticks
    }

    /// Returns the Julian day number of the calendar day.
    #[inline]
    #[must_use]
    pub const fn julian(&self) -> i64 {
        self.ticks / TICKS_PER_DAY
    }

    /// Returns the period-of-day, the sub-day remainder of the tick
    /// count. Always non-negative.
    #[inline]
    #[must_use]
    pub const fn period(&self) -> Period {
        Period::from_ticks(self.ticks % TICKS_PER_DAY)
    }

    /// Decomposes the calendar day into (year, month, day).
    #[must_use]
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_julian(self.julian())
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.ymd().0
    }

    /// Returns the calendar month, in [1, 12].
    #[must_use]
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Returns the day-of-month.
    #[must_use]
    pub fn day(&self) -> u8 {
        self.ymd().2
    }

    /// Returns whether the year of this date is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        calendar::is_leap_year(self.year()).expect("year in range by the Date invariant")
    }

    /// Returns the number of days in the month of this date.
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        let (year, month, _) = self.ymd();
        calendar::days_in_month(year, month).expect("year and month valid by the Date invariant")
    }

    /// Returns the ISO weekday number, 1 = Monday through 7 = Sunday.
    #[must_use]
    pub fn weekday(&self) -> u8 {
        let (year, month, day) = self.ymd();
        calendar::weekday(year, month, day).expect("date valid by the Date invariant")
    }
}

// ==== Date arithmetic ====

impl Date {
    /// Adds a [`DateSpan`] to this date.
    ///
    /// A [`Period`] shifts the tick count directly. [`Months`] and
    /// [`Years`] shift the calendar components, cap the day-of-month to
    /// the target month's length, and re-add the original
    /// period-of-day.
    ///
    /// # Errors
    ///   - `RangeError` if the result leaves the supported range.
    pub fn add(&self, span: impl Into<DateSpan>) -> GregorianResult<Self> {
        match span.into() {
            DateSpan::Period(period) => {
                let ticks = self
                    .ticks
                    .checked_add(period.as_ticks())
                    .ok_or_else(|| GregorianError::range().with_message("tick overflow"))?;
                Self::from_ticks(ticks)
            }
            DateSpan::Months(Months(delta)) => {
                let (year, month, day) = self.ymd();
                let (year, month) = calendar::shift_months(year, month, delta)?;
                self.with_shifted_day(year, month, day)
            }
            DateSpan::Years(Years(delta)) => {
                let (year, month, day) = self.ymd();
                let year = i32::try_from(i64::from(year) + i64::from(delta))
                    .map_err(|_| GregorianError::range().with_message("year shift overflow"))?;
                calendar::validate_year(year)?;
                self.with_shifted_day(year, month, day)
            }
        }
    }

    /// Subtracts a [`DateSpan`] from this date. The inverse shift of
    /// [`Date::add`].
    pub fn subtract(&self, span: impl Into<DateSpan>) -> GregorianResult<Self> {
        let negated = match span.into() {
            DateSpan::Period(period) => DateSpan::Period(Period::from_ticks(
                period
                    .as_ticks()
                    .checked_neg()
                    .ok_or_else(|| GregorianError::range().with_message("tick overflow"))?,
            )),
            DateSpan::Months(Months(delta)) => DateSpan::Months(Months(
                delta
                    .checked_neg()
                    .ok_or_else(|| GregorianError::range().with_message("month shift overflow"))?,
            )),
            DateSpan::Years(Years(delta)) => DateSpan::Years(Years(
                delta
                    .checked_neg()
                    .ok_or_else(|| GregorianError::range().with_message("year shift overflow"))?,
            )),
        };
        self.add(negated)
    }

    /// Rebuilds this date on a shifted (year, month) with the day
    /// capped to the target month's length, keeping the period-of-day.
    fn with_shifted_day(&self, year: i32, month: u8, day: u8) -> GregorianResult<Self> {
        let day = calendar::cap_day(year, month, day)?;
        let ticks = julian_from_ymd(year, month, day) * TICKS_PER_DAY + self.period().as_ticks();
        Self::from_ticks(ticks)
    }
}

/// The tick difference between two dates.
///
/// Total: both operands lie in the supported range, so the difference
/// always fits a [`Period`].
impl Sub for Date {
    type Output = Period;

    fn sub(self, rhs: Self) -> Period {
        Period::from_ticks(self.ticks - rhs.ticks)
    }
}

// ==== Trait impls ====

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use writeable::Writeable;
        FormattableDate::from(*self).write_to(f)
    }
}

impl core::str::FromStr for Date {
    type Err = GregorianError;

    fn from_str(s: &str) -> GregorianResult<Self> {
        parse_date(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn construction_validates_each_component() {
        assert!(Date::new(1582, 1, 1).is_ok());
        assert!(Date::new(9999, 12, 31).is_ok());
        assert_eq!(
            Date::new(1581, 12, 31).unwrap_err().kind(),
            ErrorKind::Range
        );
        assert_eq!(Date::new(10_000, 1, 1).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(Date::new(2021, 13, 1).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(
            Date::new(2021, 2, 30).unwrap_err().kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn decomposition_round_trips() {
        let d = Date::new(2012, 4, 30).unwrap();
        assert_eq!(d.ymd(), (2012, 4, 30));
        assert_eq!(d.year(), 2012);
        assert_eq!(d.month(), 4);
        assert_eq!(d.day(), 30);
        assert!(d.period().is_zero());
        assert_eq!(d.julian() * crate::TICKS_PER_DAY, d.as_ticks());
    }

    #[test]
    fn derived_accessors() {
        let d = Date::new(2012, 2, 15).unwrap();
        assert!(d.is_leap_year());
        assert_eq!(d.days_in_month(), 29);
        assert!(!Date::new(2011, 2, 15).unwrap().is_leap_year());
        assert_eq!(Date::new(2000, 1, 1).unwrap().weekday(), 6);
        assert_eq!(Date::new(2024, 1, 1).unwrap().weekday(), 1);
        assert_eq!(d.weekday(), calendar::weekday(2012, 2, 15).unwrap());
    }

    #[test]
    fn period_addition_and_inverse() {
        let d = Date::new(2012, 4, 30).unwrap();
        let p = Period::hours(13) + Period::minutes(30);
        let later = d.add(p).unwrap();
        assert_eq!(later - d, p);
        assert_eq!(later.subtract(p).unwrap(), d);
        assert_eq!(later.period(), p);
        assert_eq!(later.ymd(), (2012, 4, 30));
    }

    #[test]
    fn period_addition_crosses_days() {
        let d = Date::new(2012, 12, 31).unwrap();
        let next = d.add(Period::hours(24)).unwrap();
        assert_eq!(next.ymd(), (2013, 1, 1));
        let back = next.subtract(Period::microseconds(1)).unwrap();
        assert_eq!(back.ymd(), (2012, 12, 31));
    }

    #[test]
    fn month_addition_caps_the_day() {
        let leap = Date::new(2012, 1, 31).unwrap().add(Months(1)).unwrap();
        assert_eq!(leap, Date::new(2012, 2, 29).unwrap());
        let common = Date::new(2011, 1, 31).unwrap().add(Months(1)).unwrap();
        assert_eq!(common, Date::new(2011, 2, 28).unwrap());
        let april = Date::new(2011, 3, 31).unwrap().add(Months(1)).unwrap();
        assert_eq!(april, Date::new(2011, 4, 30).unwrap());
    }

    #[test]
    fn month_addition_preserves_period_of_day() {
        let d = Date::new(2012, 1, 31)
            .unwrap()
            .add(Period::hours(6))
            .unwrap();
        let shifted = d.add(Months(1)).unwrap();
        assert_eq!(shifted.ymd(), (2012, 2, 29));
        assert_eq!(shifted.period(), Period::hours(6));
    }

    #[test]
    fn month_addition_carries_into_year() {
        let d = Date::new(2012, 11, 30).unwrap();
        assert_eq!(d.add(Months(3)).unwrap().ymd(), (2013, 2, 28));
        assert_eq!(d.subtract(Months(12)).unwrap().ymd(), (2011, 11, 30));
    }

    #[test]
    fn year_addition_caps_leap_day() {
        let leap_day = Date::new(2012, 2, 29).unwrap();
        assert_eq!(leap_day.add(Years(1)).unwrap().ymd(), (2013, 2, 28));
        assert_eq!(leap_day.add(Years(4)).unwrap().ymd(), (2016, 2, 29));
        assert_eq!(leap_day.subtract(Years(1)).unwrap().ymd(), (2011, 2, 28));
    }

    #[test]
    fn arithmetic_enforces_the_range() {
        let max = Date::new(9999, 12, 31).unwrap();
        assert_eq!(
            max.add(Period::hours(24)).unwrap_err().kind(),
            ErrorKind::Range
        );
        assert_eq!(max.add(Months(1)).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(max.add(Years(1)).unwrap_err().kind(), ErrorKind::Range);

        let min = Date::new(1582, 1, 1).unwrap();
        assert_eq!(
            min.subtract(Period::microseconds(1)).unwrap_err().kind(),
            ErrorKind::Range
        );
        assert_eq!(min.subtract(Months(1)).unwrap_err().kind(), ErrorKind::Range);

        // The last representable instant is still valid.
        let end = max.add(Period::hours(24) - Period::microseconds(1)).unwrap();
        assert_eq!(end.ymd(), (9999, 12, 31));
    }

    #[test]
    fn subtracting_the_most_negative_period_is_a_range_error() {
        let d = Date::new(2012, 4, 30).unwrap();
        assert_eq!(
            d.subtract(Period::from_ticks(i64::MIN)).unwrap_err().kind(),
            ErrorKind::Range
        );
        assert_eq!(
            d.subtract(Period::microseconds(i64::MIN))
                .unwrap_err()
                .kind(),
            ErrorKind::Range
        );
        assert_eq!(d.subtract(Months(i32::MIN)).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(d.subtract(Years(i32::MIN)).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn ordering_follows_ticks() {
        let d1 = Date::new(2012, 4, 30).unwrap();
        let d2 = d1.add(Period::microseconds(1)).unwrap();
        assert!(d1 < d2);
        assert_eq!(d1, Date::new(2012, 4, 30).unwrap());
    }
}
