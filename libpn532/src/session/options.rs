// libpn532-rs/libpn532/src/session/options.rs

use std::time::Duration;

use crate::protocol::TargetActivation;
use crate::types::CardType;
use crate::utils::ms;

/// Settings for the passive detection loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOptions {
    pub max_targets: u8,
    pub card_type: CardType,
    /// Pause between detection attempts.
    pub poll_interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            max_targets: 1,
            card_type: CardType::Iso14443A,
            poll_interval: ms(1000),
        }
    }
}

/// Settings for the card-emulation loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulationOptions {
    /// Pause between TgGetData polls.
    pub poll_interval: Duration,
}

impl Default for EmulationOptions {
    fn default() -> Self {
        Self {
            poll_interval: ms(100),
        }
    }
}

/// What happened during one emulation run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmulationSummary {
    pub activation: TargetActivation,
    pub commands_received: usize,
    pub replies_sent: usize,
    pub send_failures: usize,
}
