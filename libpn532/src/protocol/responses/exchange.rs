// libpn532-rs/libpn532/src/protocol/responses/exchange.rs

use crate::protocol::parser;
use crate::{ChipError, Result};

/// Decode InDataExchange fields
/// Layout: Status(1) + response payload(n)
pub fn decode_in_data_exchange(data: &[u8]) -> Result<Vec<u8>> {
    let status = parser::byte_at(data, 0)?;
    if status != 0 {
        return Err(ChipError::ExchangeFailed(status).into());
    }
    Ok(data[1..].to_vec())
}

/// Decode InRelease fields. Any reply is accepted; the status byte is
/// returned for logging (0 when absent).
pub fn decode_in_release(data: &[u8]) -> u8 {
    data.first().copied().unwrap_or(0)
}
