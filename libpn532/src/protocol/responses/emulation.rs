// libpn532-rs/libpn532/src/protocol/responses/emulation.rs

use crate::protocol::parser;
use crate::{ChipError, Result};

/// Activation report returned once an external reader selects the chip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetActivation {
    /// Baud rate / framing the initiator used, if reported
    pub mode: Option<u8>,
    /// First command the initiator sent during activation
    pub initiator_command: Vec<u8>,
}

/// Decode TgInitAsTarget fields
/// Layout: Mode(1) + InitiatorCommand(n). Any reply means emulation is active.
pub fn decode_tg_init_as_target(data: &[u8]) -> TargetActivation {
    match data.split_first() {
        Some((&mode, rest)) => TargetActivation {
            mode: Some(mode),
            initiator_command: rest.to_vec(),
        },
        None => TargetActivation::default(),
    }
}

/// Decode TgGetData fields
/// Layout: Status(1) + data from the initiator(n)
///
/// A non-zero status or an empty data block means nothing arrived during
/// this poll; that is `Ok(None)`, not an error.
pub fn decode_tg_get_data(data: &[u8]) -> Result<Option<Vec<u8>>> {
    let status = parser::byte_at(data, 0)?;
    if status != 0 || data.len() == 1 {
        return Ok(None);
    }
    Ok(Some(data[1..].to_vec()))
}

/// Decode TgSetData fields
/// Layout: Status(1)
pub fn decode_tg_set_data(data: &[u8]) -> Result<()> {
    let status = parser::byte_at(data, 0)?;
    if status != 0 {
        return Err(ChipError::SendFailed(status).into());
    }
    Ok(())
}
