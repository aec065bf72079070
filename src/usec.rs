//! Microsecond time helpers.
//!
//! Times are `u64` microseconds, which covers more than 584,000 years.
//! Conversions wrap on overflow, so a negative `TimeSpec` or `TimeVal` maps to
//! its two's complement value.

use core::time::Duration;

#[cfg(all(feature = "std", target_os = "linux"))]
use nix::sys::time::{TimeSpec, TimeVal};
#[cfg(all(feature = "std", target_os = "linux"))]
use nix::time::{ClockId, clock_gettime};
#[cfg(all(feature = "std", target_os = "linux"))]
use tracing::debug;

#[cfg(all(feature = "std", target_os = "linux"))]
use crate::error::Result;

#[inline]
pub const fn from_nsec(nsec: u64) -> u64 {
    nsec / 1_000
}

#[inline]
pub const fn from_msec(msec: u64) -> u64 {
    msec.wrapping_mul(1_000)
}

#[inline]
pub const fn from_sec(sec: u64) -> u64 {
    sec.wrapping_mul(1_000_000)
}

#[inline]
pub const fn from_duration(duration: Duration) -> u64 {
    from_sec(duration.as_secs()).wrapping_add(duration.subsec_micros() as u64)
}

#[cfg(all(feature = "std", target_os = "linux"))]
#[inline]
pub fn from_timespec(ts: &TimeSpec) -> u64 {
    from_sec(ts.tv_sec() as u64).wrapping_add(from_nsec(ts.tv_nsec() as u64))
}

#[cfg(all(feature = "std", target_os = "linux"))]
#[inline]
pub fn from_timeval(tv: &TimeVal) -> u64 {
    from_sec(tv.tv_sec() as u64).wrapping_add(tv.tv_usec() as u64)
}

/// Reads `clock` and returns its current value in microseconds.
#[cfg(all(feature = "std", target_os = "linux"))]
pub fn from_clock(clock: ClockId) -> Result<u64> {
    let ts = clock_gettime(clock).inspect_err(|errno| {
        debug!(?clock, %errno, "clock_gettime failed");
    })?;
    Ok(from_timespec(&ts))
}
