// libpn532-rs/libpn532/src/device/config.rs

use std::time::Duration;

use crate::constants::{WAKE_BURST_LEN, WAKE_BYTE};
use crate::utils::{DEFAULT_READ_TIMEOUT_MS, ms};

/// Wake-up sequence written once per connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WakeConfig {
    pub byte: u8,
    pub count: usize,
    /// Delay after opening the link, before the wake burst.
    pub settle_delay: Duration,
    /// Pause between the burst and the input flush.
    pub pause: Duration,
}

impl Default for WakeConfig {
    fn default() -> Self {
        Self {
            byte: WAKE_BYTE,
            count: WAKE_BURST_LEN,
            settle_delay: ms(500),
            pause: ms(100),
        }
    }
}

impl WakeConfig {
    /// Same burst without any waiting. Used with in-memory transports.
    pub fn immediate() -> Self {
        Self {
            settle_delay: Duration::ZERO,
            pause: Duration::ZERO,
            ..Self::default()
        }
    }
}

/// Level at which raw TX/RX frames are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub frame_level: log::Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            frame_level: log::Level::Trace,
        }
    }
}

impl LogConfig {
    /// Frame dumps at debug level, for `--debug` style output.
    pub fn verbose() -> Self {
        Self {
            frame_level: log::Level::Debug,
        }
    }
}

/// Per-device configuration handed to the session at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Applies separately to the ACK read and to each frame read.
    pub read_timeout_ms: u64,
    pub wake: WakeConfig,
    pub logging: LogConfig,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            wake: WakeConfig::default(),
            logging: LogConfig::default(),
        }
    }
}
