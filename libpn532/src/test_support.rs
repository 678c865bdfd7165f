//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::card::Target;
use crate::constants::{ACK, TFI_CHIP_TO_HOST, WAKE_BYTE};
use crate::device::{Device, DeviceConfig, LogConfig, Ready, WakeConfig};
use crate::protocol::Frame;
use crate::transport::MockTransport;
use crate::types::{Atqa, Sak, TargetNumber, Uid};
use crate::Result;

/// Firmware fields answered by `seed_connect` (IC 0x32, v1.6).
pub const FIRMWARE_FIELDS: [u8; 4] = [0x32, 0x01, 0x06, 0x07];

/// Response frame the chip sends for `opcode`, response code included.
#[doc(hidden)]
pub fn response_frame(opcode: u8, fields: &[u8]) -> Vec<u8> {
    Frame::encode(TFI_CHIP_TO_HOST, opcode.wrapping_add(1), fields)
        .unwrap_or_else(|e| panic!("fixture frame for {:#04x}: {}", opcode, e))
}

/// ACK followed by the response frame, as released by one write.
#[doc(hidden)]
pub fn reply(opcode: u8, fields: &[u8]) -> Vec<u8> {
    let mut out = ACK.to_vec();
    out.extend(response_frame(opcode, fields));
    out
}

/// Queue what `connect` consumes: echo noise for the wake burst (dropped
/// by the input flush) and a firmware reply.
#[doc(hidden)]
pub fn seed_connect(mock: &MockTransport) {
    mock.push_reply(vec![WAKE_BYTE; 3]);
    mock.push_reply(reply(0x02, &FIRMWARE_FIELDS));
}

/// Default configuration without settle or wake pauses and with short
/// reads.
#[doc(hidden)]
pub fn fast_config() -> DeviceConfig {
    DeviceConfig {
        read_timeout_ms: 10,
        wake: WakeConfig::immediate(),
        logging: LogConfig::default(),
    }
}

/// Convenience: connect a Device<Ready> over `mock`. The caller seeds the
/// connect replies first (see `seed_connect`).
#[doc(hidden)]
pub fn ready_device(mock: MockTransport) -> Result<Device<Ready>> {
    Device::new(Box::new(mock), fast_config()).connect()
}

/// ISO14443-4 target with UID 04 A1 B2 C3.
#[doc(hidden)]
pub fn sample_target(number: TargetNumber) -> Target {
    let uid = Uid::try_from(&[0x04, 0xA1, 0xB2, 0xC3][..])
        .unwrap_or_else(|e| panic!("fixture uid: {}", e));
    Target::new(number, Atqa::from_bytes([0x00, 0x04]), Sak::new(0x20), uid)
}
