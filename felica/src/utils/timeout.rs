//! Timeout helpers used across the crate.
//!
//! Exchanges carry their timeout as whole milliseconds; these convert to and
//! from `Duration` at the API edge.

use std::time::Duration;

/// Default exchange timeout in milliseconds used when a caller doesn't
/// provide an explicit timeout.
pub const DEFAULT_TIMEOUT_MS: u64 = 300;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convert a Duration back to whole milliseconds, saturating.
pub fn to_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
