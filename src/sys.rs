//! The system-backed [`HostClock`] implementation.

use core::time::Duration;

use web_time::{SystemTime, UNIX_EPOCH};

use crate::host::{Clock, HostClock};
use crate::{GregorianError, GregorianResult, Period};

/// A [`HostClock`] backed by the operating system.
///
/// The epoch reading comes from [`web_time::SystemTime`], which also
/// works on wasm targets; suspension uses [`std::thread::sleep`].
///
/// There is no time zone database in this crate, so the local-time
/// offset is a fixed value configured at construction and defaults to
/// UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock {
    utc_offset: Period,
}

impl SystemClock {
    /// Creates a `SystemClock` whose local time equals UTC.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            utc_offset: Period::from_ticks(0),
        }
    }

    /// Creates a `SystemClock` with a fixed local-time offset from UTC.
    #[must_use]
    pub const fn with_utc_offset(offset: Period) -> Self {
        Self { utc_offset: offset }
    }
}

impl HostClock for SystemClock {
    fn get_host_epoch_microseconds(&self) -> GregorianResult<i64> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).map_err(|_| {
            #[cfg(feature = "log")]
            log::error!("system time predates the Unix epoch");
            GregorianError::range().with_message("error fetching system time")
        })?;
        i64::try_from(elapsed.as_micros())
            .map_err(|_| GregorianError::range().with_message("system time overflows ticks"))
    }

    fn get_host_utc_offset(&self) -> GregorianResult<Period> {
        Ok(self.utc_offset)
    }

    fn suspend(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl Clock<SystemClock> {
    /// Returns a [`Clock`] over the default system host.
    #[must_use]
    pub const fn system() -> Self {
        Self::new(SystemClock::new())
    }
}
