//! Time utilities for Butterfly seeding
//!
//! Provides wall-clock time in milliseconds since a custom epoch

use chrono::Utc;

/// Get current wall-clock time in milliseconds since Unix epoch
///
/// Clocks set before 1970 read as zero.
#[inline(always)]
pub fn unix_time_ms() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Get current time in milliseconds since custom epoch, saturating at zero
#[inline(always)]
pub fn time_since_epoch(epoch: u64) -> u64 {
    unix_time_ms().saturating_sub(epoch)
}
