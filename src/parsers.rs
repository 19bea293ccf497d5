//! This module implements the canonical text encoding and decoding of
//! [`Period`] and [`Date`].
//!
//! The canonical forms are bit-exact and used for interop and
//! persistence:
//!
//! - Period: `[-]HH:MM:SS.UUUUUU` — hours zero-padded to a minimum
//!   width of two with unbounded growth, minutes and seconds fixed
//!   width two, microseconds fixed width six.
//! - Date: `YYYY-MM-DDTHH:MM:SS.UUUUUU` — year a minimum width of
//!   four, the remaining fields fixed width, always a literal `T`
//!   separator and always microseconds, no time zone designator.
//!
//! Parsing accepts exactly these shapes with the entire input
//! consumed; any deviation is a syntax error. A leading `-` is
//! accepted for periods so that parsing is a true inverse of
//! formatting.

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{Date, GregorianError, GregorianResult, Period, Sign};

// ==== Formatting ====

/// The canonical writeable form of a [`Period`].
#[derive(Debug, Clone, Copy)]
pub struct FormattablePeriod {
    pub sign: Sign,
    pub hours: i64,
    pub minutes: u8,
    pub seconds: u8,
    pub microseconds: u32,
}

impl From<Period> for FormattablePeriod {
    fn from(period: Period) -> Self {
        let (hours, minutes, seconds, microseconds) = period.parts();
        Self {
            sign: period.sign(),
            hours,
            minutes,
            seconds,
            microseconds,
        }
    }
}

impl Writeable for FormattablePeriod {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.sign == Sign::Negative {
            sink.write_char('-')?;
        }
        if self.hours < 10 {
            sink.write_char('0')?;
        }
        self.hours.write_to(sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minutes, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.seconds, sink)?;
        sink.write_char('.')?;
        write_microseconds(self.microseconds, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        // The ":MM:SS.UUUUUU" tail is 13 characters.
        let sign = usize::from(self.sign == Sign::Negative);
        LengthHint::exact(sign + decimal_width(self.hours).max(2) + 13)
    }
}

/// The canonical writeable form of a [`Date`].
#[derive(Debug, Clone, Copy)]
pub struct FormattableDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub time: FormattablePeriod,
}

impl From<Date> for FormattableDate {
    fn from(date: Date) -> Self {
        let (year, month, day) = date.ymd();
        Self {
            year,
            month,
            day,
            time: FormattablePeriod::from(date.period()),
        }
    }
}

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.year, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.month, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.day, sink)?;
        sink.write_char('T')?;
        self.time.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_length = if (0..=9999).contains(&self.year) {
            4
        } else {
            decimal_width(i64::from(self.year))
        };
        LengthHint::exact(year_length + 7) + self.time.writeable_length_hint()
    }
}

impl_display_with_writeable!(FormattablePeriod);
impl_display_with_writeable!(FormattableDate);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

fn write_microseconds<W: core::fmt::Write + ?Sized>(
    num: u32,
    sink: &mut W,
) -> core::fmt::Result {
    let mut divisor = 100_000;
    while divisor > 0 {
        let digit = (num / divisor) % 10;
        digit.write_to(sink)?;
        divisor /= 10;
    }
    Ok(())
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        (year / 1000).write_to(sink)?;
        (year / 100 % 10).write_to(sink)?;
        (year / 10 % 10).write_to(sink)?;
        (year % 10).write_to(sink)
    } else {
        year.write_to(sink)
    }
}

fn decimal_width(value: i64) -> usize {
    let mut width = 1;
    let mut value = value / 10;
    while value != 0 {
        width += 1;
        value /= 10;
    }
    width
}

// ==== Parsing ====

fn syntax(msg: &'static str) -> GregorianError {
    GregorianError::syntax().with_message(msg)
}

/// Consumes a run of ASCII digits of at least `min` characters and
/// returns its value alongside the remaining input.
fn take_digits(bytes: &[u8], min: usize) -> GregorianResult<(i64, &[u8])> {
    let end = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    if end < min {
        return Err(syntax("expected a digit group"));
    }
    let mut value: i64 = 0;
    for byte in &bytes[..end] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(byte - b'0')))
            .ok_or_else(|| GregorianError::range().with_message("digit group overflow"))?;
    }
    Ok((value, &bytes[end..]))
}

/// Consumes exactly `width` ASCII digits.
fn take_fixed_digits(bytes: &[u8], width: usize) -> GregorianResult<(u32, &[u8])> {
    if bytes.len() < width || !bytes[..width].iter().all(u8::is_ascii_digit) {
        return Err(syntax("expected a fixed-width digit group"));
    }
    let mut value: u32 = 0;
    for byte in &bytes[..width] {
        value = value * 10 + u32::from(byte - b'0');
    }
    Ok((value, &bytes[width..]))
}

/// Consumes a single expected separator byte.
fn take_separator(bytes: &[u8], separator: u8) -> GregorianResult<&[u8]> {
    match bytes.split_first() {
        Some((byte, rest)) if *byte == separator => Ok(rest),
        _ => Err(syntax("expected a separator")),
    }
}

/// Parses the `HH:MM:SS.UUUUUU` tail shared by both canonical forms,
/// returning the unsigned tick magnitude.
///
/// The magnitude is accumulated in 128 bits so that the sign can be
/// applied before narrowing; the most negative representable period
/// has a magnitude one above `i64::MAX`.
fn parse_time_groups(bytes: &[u8]) -> GregorianResult<(i128, &[u8])> {
    let (hours, rest) = take_digits(bytes, 2)?;
    let rest = take_separator(rest, b':')?;
    let (minutes, rest) = take_fixed_digits(rest, 2)?;
    let rest = take_separator(rest, b':')?;
    let (seconds, rest) = take_fixed_digits(rest, 2)?;
    let rest = take_separator(rest, b'.')?;
    let (microseconds, rest) = take_fixed_digits(rest, 6)?;

    let ticks = i128::from(hours) * i128::from(crate::TICKS_PER_HOUR)
        + i128::from(minutes) * i128::from(crate::TICKS_PER_MINUTE)
        + i128::from(seconds) * i128::from(crate::TICKS_PER_SECOND)
        + i128::from(microseconds);
    Ok((ticks, rest))
}

fn narrow_ticks(ticks: i128) -> GregorianResult<Period> {
    i64::try_from(ticks)
        .map(Period::from_ticks)
        .map_err(|_| GregorianError::range().with_message("period value overflow"))
}

/// Parses the canonical `[-]HH:MM:SS.UUUUUU` form of a [`Period`].
///
/// # Errors
///   - `SyntaxError` on any deviation from the canonical shape or on
///     trailing input.
///   - `RangeError` if the value exceeds the 64-bit tick width.
pub fn parse_period(bytes: &[u8]) -> GregorianResult<Period> {
    let (negative, bytes) = match bytes.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, bytes),
    };
    let (magnitude, rest) = parse_time_groups(bytes)?;
    if !rest.is_empty() {
        return Err(syntax("unexpected trailing input after period"));
    }
    narrow_ticks(if negative { -magnitude } else { magnitude })
}

/// Parses the canonical `YYYY-MM-DDTHH:MM:SS.UUUUUU` form of a
/// [`Date`].
///
/// The value is constructed as `Date::new(y, m, d)` plus the parsed
/// time-of-day, so domain failures surface with their own error kinds.
///
/// # Errors
///   - `SyntaxError` on any deviation from the canonical shape or on
///     trailing input.
///   - `RangeError` / `ValidationError` from date construction.
pub fn parse_date(bytes: &[u8]) -> GregorianResult<Date> {
    let (year, rest) = take_digits(bytes, 4)?;
    let year = i32::try_from(year)
        .map_err(|_| GregorianError::range().with_message("year value overflow"))?;
    let rest = take_separator(rest, b'-')?;
    let (month, rest) = take_fixed_digits(rest, 2)?;
    let rest = take_separator(rest, b'-')?;
    let (day, rest) = take_fixed_digits(rest, 2)?;
    let rest = take_separator(rest, b'T')?;
    let (time, rest) = parse_time_groups(rest)?;
    if !rest.is_empty() {
        return Err(syntax("unexpected trailing input after date"));
    }
    Date::new(year, month as u8, day as u8)?.add(narrow_ticks(time)?)
}
