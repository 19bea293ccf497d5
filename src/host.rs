//! The host clock boundary.
//!
//! Retrieving the operating system's wall clock and suspending the
//! calling thread are external collaborators, not part of the calendar
//! core. [`HostClock`] is the minimal capability interface a host must
//! provide; [`Clock`] derives the user-facing `now_local` / `now_utc` /
//! `sleep` operations from it.

use core::time::Duration;

use crate::{
    julian::UNIX_EPOCH_JULIAN, Date, GregorianError, GregorianResult, Period, TICKS_PER_DAY,
};

/// The host capability interface for clock access.
///
/// One concrete implementation exists per target platform; the `sys`
/// feature provides [`SystemClock`](crate::SystemClock) backed by the
/// operating system.
pub trait HostClock {
    /// Returns the current UTC time as whole microseconds since the
    /// Unix epoch.
    fn get_host_epoch_microseconds(&self) -> GregorianResult<i64>;

    /// Returns the host's local-time offset from UTC.
    fn get_host_utc_offset(&self) -> GregorianResult<Period>;

    /// Suspends the calling execution context for the given duration.
    ///
    /// Callers have already validated the duration as non-negative.
    fn suspend(&self, duration: Duration);
}

/// Clock operations derived from a [`HostClock`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Clock<H: HostClock> {
    host: H,
}

impl<H: HostClock> Clock<H> {
    /// Creates a `Clock` over the given host implementation.
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Returns the current UTC date and time.
    pub fn now_utc(&self) -> GregorianResult<Date> {
        let micros = self.host.get_host_epoch_microseconds()?;
        date_from_epoch_microseconds(micros)
    }

    /// Returns the current local date and time.
    pub fn now_local(&self) -> GregorianResult<Date> {
        let micros = self.host.get_host_epoch_microseconds()?;
        let offset = self.host.get_host_utc_offset()?;
        let micros = micros
            .checked_add(offset.as_ticks())
            .ok_or_else(|| GregorianError::range().with_message("utc offset overflows the time"))?;
        date_from_epoch_microseconds(micros)
    }

    /// Suspends the calling execution context for the given period.
    ///
    /// # Errors
    ///   - `ValidationError` if the period is negative. The host is not
    ///     invoked in that case.
    pub fn sleep(&self, period: Period) -> GregorianResult<()> {
        if period.is_negative() {
            return Err(GregorianError::validation()
                .with_message("cannot sleep a negative amount of time"));
        }
        #[cfg(feature = "log")]
        log::trace!("suspending for {period}");
        self.host
            .suspend(Duration::from_micros(period.as_ticks() as u64));
        Ok(())
    }
}

/// Converts a Unix-epoch microsecond reading into a range-validated
/// [`Date`].
fn date_from_epoch_microseconds(micros: i64) -> GregorianResult<Date> {
    let ticks = (UNIX_EPOCH_JULIAN * TICKS_PER_DAY)
        .checked_add(micros)
        .ok_or_else(|| GregorianError::range().with_message("epoch reading overflows ticks"))?;
    Date::from_ticks(ticks)
}
