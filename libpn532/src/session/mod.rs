// libpn532-rs/libpn532/src/session/mod.rs

//! Operating modes built on top of a ready `Device`.
//!
//! Each mode is a loop of command-set calls. "No target" and "no data
//! this poll" are normal outcomes and the loop simply tries again after
//! its poll interval. Recoverable protocol errors are logged and retried
//! the same way; transport errors end the loop. Cancellation is checked
//! between iterations and while sleeping; an in-flight read always runs
//! to its own timeout.

use std::time::{Duration, Instant};

pub use tokio_util::sync::CancellationToken;

mod emulate;
mod options;
mod poll;

pub use options::{EmulationOptions, EmulationSummary, PollOptions};

const CANCEL_CHECK_SLICE: Duration = Duration::from_millis(20);

/// Sleep for `dur` unless `cancel` fires first. Returns true when
/// cancelled.
pub(crate) fn sleep_unless_cancelled(cancel: &CancellationToken, dur: Duration) -> bool {
    let deadline = Instant::now() + dur;
    while !cancel.is_cancelled() {
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        std::thread::sleep((deadline - now).min(CANCEL_CHECK_SLICE));
    }
    true
}
