// libpn532-rs/libpn532/src/protocol/commands/initiator.rs

use crate::types::{CardType, TargetNumber};

/// Encode InListPassiveTarget parameters: MaxTg, BrTy
pub fn encode_in_list_passive_target(max_targets: u8, card_type: CardType) -> Vec<u8> {
    vec![max_targets, card_type as u8]
}

/// Encode InDataExchange parameters: Tg followed by the opaque APDU
pub fn encode_in_data_exchange(target: TargetNumber, apdu: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(1 + apdu.len());
    buf.push(target.as_u8());
    buf.extend_from_slice(apdu);
    buf
}

/// Encode InRelease parameters: Tg
pub fn encode_in_release(target: TargetNumber) -> Vec<u8> {
    vec![target.as_u8()]
}
