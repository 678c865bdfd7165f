// libpn532-rs/libpn532/src/utils/timeout.rs

//! Timeout helpers used across the crate.

use std::time::Duration;

/// Default per-read timeout in milliseconds. Applies separately to the ACK
/// read and to each frame-field read.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 2000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
