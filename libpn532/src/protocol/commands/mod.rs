// libpn532-rs/libpn532/src/protocol/commands/mod.rs

pub mod initiator;
pub mod system;
pub mod target;

pub use initiator::{encode_in_data_exchange, encode_in_list_passive_target, encode_in_release};
pub use system::{SamConfig, SamMode, encode_get_firmware_version, encode_sam_configuration};
pub use target::{
    EmulationProfile, encode_tg_get_data, encode_tg_init_as_target, encode_tg_set_data,
};

use crate::Result;
use crate::constants::*;
use crate::types::{CardType, TargetNumber};

/// High-level Command enum. New commands should be added here and
/// their parameter encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration(SamConfig),
    InListPassiveTarget {
        max_targets: u8,
        card_type: CardType,
    },
    InDataExchange {
        target: TargetNumber,
        apdu: Vec<u8>,
    },
    InRelease {
        target: TargetNumber,
    },
    TgInitAsTarget(EmulationProfile),
    TgGetData,
    TgSetData(Vec<u8>),
}

impl Command {
    /// Return the PN532 command code.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration(_) => CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => CMD_IN_DATA_EXCHANGE,
            Self::InRelease { .. } => CMD_IN_RELEASE,
            Self::TgInitAsTarget(_) => CMD_TG_INIT_AS_TARGET,
            Self::TgGetData => CMD_TG_GET_DATA,
            Self::TgSetData(_) => CMD_TG_SET_DATA,
        }
    }

    /// Encode the parameter bytes that follow the command code.
    pub fn params(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration(config) => encode_sam_configuration(config),
            Self::InListPassiveTarget {
                max_targets,
                card_type,
            } => encode_in_list_passive_target(*max_targets, *card_type),
            Self::InDataExchange { target, apdu } => encode_in_data_exchange(*target, apdu),
            Self::InRelease { target } => encode_in_release(*target),
            Self::TgInitAsTarget(profile) => encode_tg_init_as_target(profile),
            Self::TgGetData => encode_tg_get_data(),
            Self::TgSetData(data) => encode_tg_set_data(data),
        }
    }

    /// Encode the command into a full host->chip wire frame.
    pub fn encode(&self) -> Result<Vec<u8>> {
        crate::protocol::Frame::encode(TFI_HOST_TO_CHIP, self.opcode(), &self.params())
    }
}
