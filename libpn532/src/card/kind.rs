// libpn532-rs/libpn532/src/card/kind.rs

use crate::types::Sak;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card family inferred from the SAK byte of a Type A target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CardKind {
    /// ISO/IEC 14443-4 compliant (EMV cards, phones, DESFire)
    #[display(fmt = "ISO14443-4")]
    Iso14443_4,
    #[display(fmt = "Classic-1K")]
    Classic1K,
    #[display(fmt = "Classic-4K")]
    Classic4K,
    #[display(fmt = "Ultralight")]
    Ultralight,
    #[display(fmt = "Plus")]
    Plus,
    #[display(fmt = "Unknown (0x{:02X})", _0)]
    Unknown(u8),
}

impl CardKind {
    /// Classify a SAK value. Rules are checked in order and the first
    /// match wins; bit 0x20 takes priority over the exact matches.
    pub fn from_sak(sak: Sak) -> Self {
        let raw = sak.as_u8();
        if raw & 0x20 != 0 {
            return CardKind::Iso14443_4;
        }
        match raw {
            0x08 => CardKind::Classic1K,
            0x18 => CardKind::Classic4K,
            0x00 => CardKind::Ultralight,
            0x10 => CardKind::Plus,
            other => CardKind::Unknown(other),
        }
    }

    /// True when the card speaks ISO 14443-4 and accepts APDUs.
    pub fn supports_apdu(&self) -> bool {
        matches!(self, CardKind::Iso14443_4)
    }
}

impl From<Sak> for CardKind {
    fn from(sak: Sak) -> Self {
        Self::from_sak(sak)
    }
}
