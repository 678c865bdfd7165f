// libpn532-rs/libpn532/src/card/mod.rs

use crate::device::{Device, Ready};
use crate::types::{Atqa, Sak, TargetNumber, Uid};
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod kind;
pub use kind::CardKind;

pub mod operations;

/// Descriptor of a target found by InListPassiveTarget.
///
/// Valid until released or superseded by a newer detection. The engine
/// does not track staleness; callers holding an old `Target` after a new
/// poll get whatever the chip does with a reused target number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Target {
    number: TargetNumber,
    atqa: Atqa,
    sak: Sak,
    uid: Uid,
}

impl Target {
    pub fn new(number: TargetNumber, atqa: Atqa, sak: Sak, uid: Uid) -> Self {
        Self {
            number,
            atqa,
            sak,
            uid,
        }
    }

    pub fn number(&self) -> TargetNumber {
        self.number
    }
    pub fn atqa(&self) -> Atqa {
        self.atqa
    }
    pub fn sak(&self) -> Sak {
        self.sak
    }
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Card family derived from SAK.
    pub fn kind(&self) -> CardKind {
        CardKind::from_sak(self.sak)
    }

    /// Exchange an APDU with this target.
    pub fn exchange(&self, device: &mut Device<Ready>, apdu: &[u8]) -> Result<Vec<u8>> {
        operations::exchange(self, device, apdu)
    }

    /// Release this target. Consumes the descriptor since the chip may
    /// hand the number to the next detection.
    pub fn release(self, device: &mut Device<Ready>) {
        operations::release(self, device)
    }
}
