// fixtures.rs — provides commonly used test payloads/frames

use libpn532::constants::TFI_CHIP_TO_HOST_BARE;
use libpn532::protocol::Frame;

/// Firmware fields as laid out without a response code.
pub const BARE_FIRMWARE: [u8; 4] = [0xA9, 0x32, 0x01, 0x07];

/// SELECT PPSE (2PAY.SYS.DDF01)
pub const SELECT_PPSE: &str = "00A404000E325041592E5359532E444446303100";

pub fn select_ppse() -> Vec<u8> {
    hex::decode(SELECT_PPSE).unwrap()
}

pub fn sample_uid_bytes() -> [u8; 7] {
    [0x04, 0x5A, 0x3C, 0x12, 0x8B, 0x6F, 0x80]
}

/// InListPassiveTarget fields for one ISO14443-4 target with a 7 byte UID.
pub fn passive_target_fields() -> Vec<u8> {
    let mut fields = vec![0x01, 0x01, 0x00, 0x44, 0x20, 0x07];
    fields.extend_from_slice(&sample_uid_bytes());
    fields
}

/// A 0xD7-tagged frame whose data is exactly `data` (no response code).
pub fn bare_frame(data: &[u8]) -> Vec<u8> {
    let (first, rest) = data.split_first().unwrap();
    Frame::encode(TFI_CHIP_TO_HOST_BARE, *first, rest).unwrap()
}

/// FCI template answer to SELECT PPSE, status word included.
pub fn ppse_answer() -> Vec<u8> {
    hex::decode("6F10840E325041592E5359532E44444630319000").unwrap()
}
