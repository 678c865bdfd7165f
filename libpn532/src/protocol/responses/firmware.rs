// libpn532-rs/libpn532/src/protocol/responses/firmware.rs

use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Decode GetFirmwareVersion fields
/// Layout: IC(1) + Ver(1) + Rev(1) + Support(1)
///
/// An empty or short reply means the chip is not really talking to us,
/// so it is reported as `Error::NotConnected`.
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    match data {
        [ic, version, revision, support, ..] => Ok(FirmwareVersion {
            ic: *ic,
            version: *version,
            revision: *revision,
            support: *support,
        }),
        _ => Err(Error::NotConnected),
    }
}
