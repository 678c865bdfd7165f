// libpn532-rs/libpn532/src/protocol/responses/mod.rs

pub mod exchange;
pub mod firmware;
pub mod passive;
pub mod emulation;

pub use exchange::{decode_in_data_exchange, decode_in_release};
pub use firmware::decode_firmware_version;
pub use passive::{Detection, decode_in_list_passive_target};
pub use emulation::{
    TargetActivation, decode_tg_get_data, decode_tg_init_as_target, decode_tg_set_data,
};

use crate::constants::*;
use crate::protocol::{Frame, parser};
use crate::types::FirmwareVersion;
use crate::{FrameError, Result};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfigured,
    PassiveTarget(Detection),
    DataExchange(Vec<u8>),
    Released { status: u8 },
    TargetInitialized(TargetActivation),
    TargetData(Option<Vec<u8>>),
    TargetDataSent,
}

impl Response {
    /// Decode a response frame for the command that was sent.
    ///
    /// Frames tagged `TFI_CHIP_TO_HOST` (0xD5) start with the response code
    /// (`opcode + 1`), which is dropped before field decoding. Any other tag
    /// is taken as the bare layout, where byte 0 is already a field.
    pub fn from_frame(opcode: u8, frame: &Frame) -> Result<Self> {
        if frame.tag != TFI_CHIP_TO_HOST {
            return Self::decode(opcode, &frame.data);
        }
        let fields = parser::strip_response_code(opcode, &frame.data);
        let coded = fields.len() < frame.data.len();
        Self::decode_fields(opcode, fields, coded)
    }

    /// Decode bare response fields (no response code) for the command that
    /// was sent. A status byte equal to `opcode + 1` stays a status byte.
    pub fn decode(opcode: u8, fields: &[u8]) -> Result<Self> {
        Self::decode_fields(opcode, fields, false)
    }

    fn decode_fields(opcode: u8, fields: &[u8], coded: bool) -> Result<Self> {
        match opcode {
            CMD_GET_FIRMWARE_VERSION => {
                decode_firmware_version(fields).map(Self::FirmwareVersion)
            }
            // SAMConfiguration has no output fields: the response code alone
            // acknowledges it. Without one, any non-empty reply counts.
            CMD_SAM_CONFIGURATION if coded || !fields.is_empty() => Ok(Self::SamConfigured),
            CMD_SAM_CONFIGURATION => Err(FrameError::Truncated {
                expected: 1,
                actual: 0,
            }
            .into()),
            CMD_IN_LIST_PASSIVE_TARGET => {
                decode_in_list_passive_target(fields).map(Self::PassiveTarget)
            }
            CMD_IN_DATA_EXCHANGE => decode_in_data_exchange(fields).map(Self::DataExchange),
            CMD_IN_RELEASE => Ok(Self::Released {
                status: decode_in_release(fields),
            }),
            CMD_TG_INIT_AS_TARGET => Ok(Self::TargetInitialized(decode_tg_init_as_target(
                fields,
            ))),
            CMD_TG_GET_DATA => decode_tg_get_data(fields).map(Self::TargetData),
            CMD_TG_SET_DATA => decode_tg_set_data(fields).map(|_| Self::TargetDataSent),
            other => Err(crate::Error::InvalidState(format!(
                "no decoder for command code {:#04x}",
                other
            ))),
        }
    }

    /// Return the command code this response answers.
    pub fn opcode(&self) -> u8 {
        match self {
            Response::FirmwareVersion(_) => CMD_GET_FIRMWARE_VERSION,
            Response::SamConfigured => CMD_SAM_CONFIGURATION,
            Response::PassiveTarget(_) => CMD_IN_LIST_PASSIVE_TARGET,
            Response::DataExchange(_) => CMD_IN_DATA_EXCHANGE,
            Response::Released { .. } => CMD_IN_RELEASE,
            Response::TargetInitialized(_) => CMD_TG_INIT_AS_TARGET,
            Response::TargetData(_) => CMD_TG_GET_DATA,
            Response::TargetDataSent => CMD_TG_SET_DATA,
        }
    }
}
