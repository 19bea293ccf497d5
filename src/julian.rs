//! This module implements the Julian day number conversions.
//!
//! A Julian day number is a continuous, calendar-system-independent day
//! count that serves as the intermediate representation between the
//! (year, month, day) civil form and the tick form of a [`Date`].
//!
//! The conversions use the shifted-era civil algorithms described by
//! Howard Hinnant, offset so that the returned day count is a true
//! Julian day number (the Unix epoch 1970-01-01 is day 2,440,588).
//!
//! [`Date`]: crate::Date

/// Julian day number of 0000-03-01, the epoch of the shifted-era form.
const SHIFTED_EPOCH_JULIAN: i64 = 1_721_120;

/// Julian day number of the Unix epoch, 1970-01-01.
pub(crate) const UNIX_EPOCH_JULIAN: i64 = 2_440_588;

/// Days per 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Converts a civil (year, month, day) to its Julian day number.
///
/// The input must already have passed day-of-month validation; the
/// transform itself is total over the supported year range.
#[must_use]
pub fn julian_from_ymd(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(if month <= 2 { year - 1 } else { year });
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let m = i64::from(month);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * DAYS_PER_ERA + doe + SHIFTED_EPOCH_JULIAN
}

/// Converts a Julian day number back to its civil (year, month, day).
///
/// Exact inverse of [`julian_from_ymd`] over the supported range.
#[must_use]
pub fn ymd_from_julian(julian: i64) -> (i32, u8, u8) {
    let z = julian - SHIFTED_EPOCH_JULIAN;
    let era = if z >= 0 { z } else { z - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if month <= 2 { y + 1 } else { y };
    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MAX_JULIAN_DAY, MIN_JULIAN_DAY};

    #[test]
    fn known_julian_day_numbers() {
        // Start of the Gregorian reform calendar.
        assert_eq!(julian_from_ymd(1582, 10, 15), 2_299_161);
        // Unix epoch.
        assert_eq!(julian_from_ymd(1970, 1, 1), 2_440_588);
        // J2000.
        assert_eq!(julian_from_ymd(2000, 1, 1), 2_451_545);
        // Supported range boundaries.
        assert_eq!(julian_from_ymd(1582, 1, 1), MIN_JULIAN_DAY);
        assert_eq!(julian_from_ymd(9999, 12, 31), MAX_JULIAN_DAY);
    }

    #[test]
    fn inverse_of_known_days() {
        assert_eq!(ymd_from_julian(2_299_161), (1582, 10, 15));
        assert_eq!(ymd_from_julian(2_440_588), (1970, 1, 1));
        assert_eq!(ymd_from_julian(MIN_JULIAN_DAY), (1582, 1, 1));
        assert_eq!(ymd_from_julian(MAX_JULIAN_DAY), (9999, 12, 31));
    }

    #[test]
    fn round_trips_across_leap_boundaries() {
        for &(y, m, d) in &[
            (1582, 1, 1),
            (1600, 2, 29),
            (1700, 2, 28),
            (1900, 3, 1),
            (2000, 2, 29),
            (2011, 2, 28),
            (2012, 2, 29),
            (2012, 12, 31),
            (9999, 12, 31),
        ] {
            let julian = julian_from_ymd(y, m, d);
            assert_eq!(ymd_from_julian(julian), (y, m, d), "{y}-{m}-{d}");
        }
    }

    #[test]
    fn consecutive_days_are_consecutive_numbers() {
        assert_eq!(
            julian_from_ymd(1999, 12, 31) + 1,
            julian_from_ymd(2000, 1, 1)
        );
        assert_eq!(
            julian_from_ymd(2020, 2, 28) + 2,
            julian_from_ymd(2020, 3, 1)
        );
    }
}
