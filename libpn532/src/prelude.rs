// libpn532-rs/libpn532/src/prelude.rs

pub use crate::card::{CardKind, Target};
pub use crate::device::{Device, DeviceBuilder, DeviceConfig, Disconnected, Phase, Ready};
pub use crate::protocol::{Command, Detection, EmulationProfile, Response, SamConfig};
pub use crate::session::{CancellationToken, EmulationOptions, EmulationSummary, PollOptions};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    Atqa, CardType, ChannelError, ChipError, Error, FirmwareVersion, FrameError, Result, Sak,
    TargetNumber, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_spaced, bytes_to_hex_upper, ms};
