// libpn532-rs/libpn532/src/protocol/responses/passive.rs

use crate::card::Target;
use crate::protocol::parser;
use crate::types::{Atqa, Sak, TargetNumber, Uid};
use crate::Result;

/// Outcome of a passive-target detection. An empty field is a valid
/// result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    NoTarget,
    Found(Target),
}

impl Detection {
    pub fn into_target(self) -> Option<Target> {
        match self {
            Detection::Found(target) => Some(target),
            Detection::NoTarget => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Detection::Found(_))
    }
}

/// Decode InListPassiveTarget fields (106 kbps Type A)
/// Layout: NbTg(1) + Tg(1) + ATQA(2) + SAK(1) + UID length L(1) + UID(L)
///
/// Only the first target is decoded. A UID length pointing past the end
/// of the reply is `FrameError::Truncated`, never a partial descriptor.
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<Detection> {
    let count = parser::byte_at(data, 0)?;
    if count == 0 {
        return Ok(Detection::NoTarget);
    }

    let number = TargetNumber::new(parser::byte_at(data, 1)?);
    let atqa = parser::slice_at(data, 2, 2)?;
    let sak = Sak::new(parser::byte_at(data, 4)?);
    let uid_len = parser::byte_at(data, 5)? as usize;
    let uid = Uid::try_from(parser::slice_at(data, 6, uid_len)?)?;

    Ok(Detection::Found(Target::new(
        number,
        Atqa::from_bytes([atqa[0], atqa[1]]),
        sak,
        uid,
    )))
}
