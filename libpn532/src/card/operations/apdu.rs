use crate::card::Target;
use crate::device::{Device, Ready};
use crate::Result;

/// Send an APDU to `target` and return the card's reply (status word
/// included). The payload is opaque to the engine.
pub fn exchange(target: &Target, device: &mut Device<Ready>, apdu: &[u8]) -> Result<Vec<u8>> {
    device.exchange(target, apdu)
}

/// Release `target`. Failures are logged by the device and not returned.
pub fn release(target: Target, device: &mut Device<Ready>) {
    device.in_release(target.number());
}
