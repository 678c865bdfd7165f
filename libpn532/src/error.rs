// libpn532-rs/libpn532/src/error.rs

use thiserror::Error;

use crate::utils::bytes_to_hex_spaced;

/// Wire-level corruption detected while decoding a frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("bad frame header: [{}]", bytes_to_hex_spaced(.found))]
    BadHeader { found: Vec<u8> },

    #[error("bad length checksum: len={length:#04x}, lcs={checksum:#04x}")]
    BadLengthChecksum { length: u8, checksum: u8 },

    #[error("bad data checksum: expected {expected:#04x}, got {actual:#04x}")]
    BadDataChecksum { expected: u8, actual: u8 },

    #[error("truncated frame: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("frame too long: length field would be {length} (max 255)")]
    TooLong { length: usize },
}

/// Failures of the request/ACK/response handshake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    #[error("no ACK from chip: received [{}]", bytes_to_hex_spaced(.received))]
    NoAck { received: Vec<u8> },

    #[error("invalid response frame: {0}")]
    InvalidResponse(#[source] FrameError),
}

impl ChannelError {
    /// True when the chip answered with an explicit NACK token.
    pub fn is_nack(&self) -> bool {
        matches!(self, Self::NoAck { received } if received.as_slice() == crate::constants::NACK)
    }
}

/// Non-zero status codes reported by the chip for card operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipError {
    #[error("data exchange failed: status={0:#04x}")]
    ExchangeFailed(u8),

    #[error("target data send failed: status={0:#04x}")]
    SendFailed(u8),

    #[error("chip reported an application error frame")]
    ApplicationError,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("device not found")]
    DeviceNotFound,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // serialport は feature `serial` でのみ有効
    #[cfg(feature = "serial")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error(transparent)]
    Frame(#[from] FrameError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Chip(#[from] ChipError),

    #[error("invalid field length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("chip not connected: firmware query returned no usable data")]
    NotConnected,

    #[error("SAM configuration failed: {0}")]
    SamConfigurationFailed(#[source] ChannelError),

    #[error("emulation failed to start: {0}")]
    EmulationFailed(#[source] ChannelError),

    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    /// Transport failures end the session; everything else only fails
    /// the command that produced it.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::DeviceNotFound | Error::Transport(_) | Error::Io(_) => true,
            #[cfg(feature = "serial")]
            Error::Serial(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_error_display_includes_raw_bytes() {
        let err = FrameError::BadHeader {
            found: vec![0x00, 0xff, 0x00],
        };
        let s = format!("{}", err);
        assert!(s.contains("00 ff 00"));
    }

    #[test]
    fn data_checksum_display() {
        let err = FrameError::BadDataChecksum {
            expected: 0x2a,
            actual: 0x2b,
        };
        assert!(format!("{}", err).contains("expected 0x2a"));
    }

    #[test]
    fn no_ack_and_nack_detection() {
        let nack = ChannelError::NoAck {
            received: crate::constants::NACK.to_vec(),
        };
        assert!(nack.is_nack());
        assert!(format!("{}", nack).contains("00 00 ff ff 00 00"));

        let short = ChannelError::NoAck {
            received: vec![0x00, 0x00],
        };
        assert!(!short.is_nack());
    }

    #[test]
    fn chip_error_display() {
        let err: Error = ChipError::ExchangeFailed(0x01).into();
        assert!(format!("{}", err).contains("status=0x01"));
    }

    #[test]
    fn fatal_classification() {
        assert!(Error::Transport("port closed".into()).is_fatal());
        assert!(Error::Io(std::io::Error::other("gone")).is_fatal());
        assert!(!Error::NotConnected.is_fatal());
        assert!(!Error::from(ChannelError::NoAck { received: vec![] }).is_fatal());
        assert!(
            !Error::from(FrameError::Truncated {
                expected: 3,
                actual: 0
            })
            .is_fatal()
        );
    }
}
