// libpn532-rs/libpn532/src/types.rs

use crate::Error;
use crate::constants::MAX_UID_LEN;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Session-scoped handle the chip assigns to a detected target (Tg).
/// Not globally unique; the chip reuses numbers across detections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "{}", _0)]
pub struct TargetNumber(u8);

impl TargetNumber {
    pub const fn new(n: u8) -> Self {
        Self(n)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// ATQA / SENS_RES (2 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

/// SAK / SEL_RES
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "{:02X}", _0)]
pub struct Sak(u8);

impl Sak {
    pub const fn new(sak: u8) -> Self {
        Self(sak)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// UID (NFCID1) - 1 to 10 バイト
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.is_empty() || bytes.len() > MAX_UID_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_UID_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// Card family requested from InListPassiveTarget (BrTy)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CardType {
    /// 106 kbps ISO/IEC14443 Type A (MIFARE, EMV)
    #[default]
    Iso14443A = 0x00,
    /// 212 kbps FeliCa
    Felica = 0x01,
}

/// Firmware identification returned by GetFirmwareVersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(
    fmt = "v{}.{} (IC: 0x{:02X}, Support: 0x{:02X})",
    version,
    revision,
    ic,
    support
)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}
