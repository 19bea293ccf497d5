//! Calendar utilities for the proleptic Gregorian calendar.
//!
//! These cover the leap-year test, month lengths, ISO weekday numbers,
//! the year/month/day validations shared by [`Date`] construction and
//! parsing, and the month-shift arithmetic used by month and year
//! addition.
//!
//! [`Date`]: crate::Date

use num_traits::Euclid;

use crate::{julian::julian_from_ymd, GregorianError, GregorianResult, MAX_YEAR, MIN_YEAR};

/// Month lengths of a non-leap year.
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Validates that a year lies within the supported [1582, 9999] range.
pub fn validate_year(year: i32) -> GregorianResult<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(GregorianError::range()
            .with_message(alloc::format!("year {year} is outside the supported range ({MIN_YEAR} to {MAX_YEAR})")));
    }
    Ok(())
}

/// Validates that a month lies in [1, 12].
pub fn validate_month(month: u8) -> GregorianResult<()> {
    if !(1..=12).contains(&month) {
        return Err(GregorianError::range()
            .with_message(alloc::format!("month {month} is outside the valid range (1 to 12)")));
    }
    Ok(())
}

/// Validates a day-of-month against the month's length.
pub fn validate_day(year: i32, month: u8, day: u8) -> GregorianResult<()> {
    if day < 1 || day > days_in_month(year, month)? {
        return Err(GregorianError::validation()
            .with_message(alloc::format!("{year}-{month}-{day} is not a valid calendar date")));
    }
    Ok(())
}

/// Returns whether `year` is a Gregorian leap year.
///
/// # Errors
///   - Returns a `RangeError` if the year is outside [1582, 9999].
pub fn is_leap_year(year: i32) -> GregorianResult<bool> {
    validate_year(year)?;
    Ok(year % 4 == 0 && (year % 100 != 0 || year % 400 == 0))
}

/// Returns the number of days in the given month.
///
/// # Errors
///   - Returns a `RangeError` on an invalid year or month.
pub fn days_in_month(year: i32, month: u8) -> GregorianResult<u8> {
    validate_month(month)?;
    if month == 2 && is_leap_year(year)? {
        return Ok(29);
    }
    validate_year(year)?;
    Ok(DAYS_IN_MONTH[(month - 1) as usize])
}

/// Returns the ISO weekday number, 1 = Monday through 7 = Sunday.
///
/// The weekday is a congruence of the Julian day number; day 0 of the
/// Julian period was a Monday.
///
/// # Errors
///   - Returns a `RangeError` or `ValidationError` if (year, month, day)
///     is not a valid calendar date.
pub fn weekday(year: i32, month: u8, day: u8) -> GregorianResult<u8> {
    validate_day(year, month, day)?;
    Ok((julian_from_ymd(year, month, day).rem_euclid(7) + 1) as u8)
}

/// Shifts a (year, month) pair by a signed number of months, carrying
/// into the year, and validates the result.
///
/// # Errors
///   - Returns a `RangeError` if the shifted year leaves [1582, 9999].
pub fn shift_months(year: i32, month: u8, delta: i32) -> GregorianResult<(i32, u8)> {
    let zero_based = i64::from(month) - 1 + i64::from(delta);
    let (carry, new_month) = zero_based.div_rem_euclid(&12);
    let new_year = i64::from(year) + carry;
    let new_year = i32::try_from(new_year)
        .map_err(|_| GregorianError::range().with_message("month shift overflows the year"))?;
    validate_year(new_year)?;
    Ok((new_year, new_month as u8 + 1))
}

/// Caps a day-of-month to the length of the given month.
///
/// After a month or year shift the original day may exceed the new
/// month's length (e.g. Jan 31 shifted by one month); the policy is to
/// cap the day at the end of the month rather than overflow into the
/// next one.
pub fn cap_day(year: i32, month: u8, day: u8) -> GregorianResult<u8> {
    Ok(day.min(days_in_month(year, month)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000).unwrap());
        assert!(is_leap_year(2012).unwrap());
        assert!(!is_leap_year(1900).unwrap());
        assert!(!is_leap_year(2011).unwrap());
        assert_eq!(is_leap_year(1581).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(is_leap_year(10_000).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2012, 2).unwrap(), 29);
        assert_eq!(days_in_month(2011, 2).unwrap(), 28);
        assert_eq!(days_in_month(2011, 1).unwrap(), 31);
        assert_eq!(days_in_month(2011, 4).unwrap(), 30);
        assert_eq!(days_in_month(2011, 12).unwrap(), 31);
        assert_eq!(days_in_month(2011, 0).unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(days_in_month(2011, 13).unwrap_err().kind(), ErrorKind::Range);
    }

    #[test]
    fn day_validation() {
        assert!(validate_day(2021, 2, 28).is_ok());
        let err = validate_day(2021, 2, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.message().contains("2021-2-30"));
        assert_eq!(
            validate_day(2021, 4, 31).unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            validate_day(2021, 1, 0).unwrap_err().kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn iso_weekdays() {
        // Fixed reference: 2000-01-01 was a Saturday.
        assert_eq!(weekday(2000, 1, 1).unwrap(), 6);
        // 1582-10-15, first day of the reform calendar, was a Friday.
        assert_eq!(weekday(1582, 10, 15).unwrap(), 5);
        // 2024-01-01 was a Monday.
        assert_eq!(weekday(2024, 1, 1).unwrap(), 1);
        // 2023-12-31 was a Sunday.
        assert_eq!(weekday(2023, 12, 31).unwrap(), 7);
    }

    #[test]
    fn month_shift_carries_into_year() {
        assert_eq!(shift_months(2012, 1, 1).unwrap(), (2012, 2));
        assert_eq!(shift_months(2012, 12, 1).unwrap(), (2013, 1));
        assert_eq!(shift_months(2012, 1, -1).unwrap(), (2011, 12));
        assert_eq!(shift_months(2012, 6, 25).unwrap(), (2014, 7));
        assert_eq!(shift_months(2012, 6, -30).unwrap(), (2009, 12));
        assert_eq!(
            shift_months(9999, 12, 1).unwrap_err().kind(),
            ErrorKind::Range
        );
        assert_eq!(
            shift_months(1582, 1, -1).unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn day_capping() {
        assert_eq!(cap_day(2012, 2, 31).unwrap(), 29);
        assert_eq!(cap_day(2011, 2, 31).unwrap(), 28);
        assert_eq!(cap_day(2011, 4, 31).unwrap(), 30);
        assert_eq!(cap_day(2011, 1, 15).unwrap(), 15);
    }
}
