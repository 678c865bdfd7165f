// libpn532-rs/libpn532/src/protocol/parser.rs

use crate::{FrameError, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(FrameError::Truncated {
            expected: min,
            actual: data.len(),
        }
        .into());
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// The chip echoes `opcode + 1` ahead of the response fields. Drop that
/// byte when present so decoders see only the fields themselves.
pub fn strip_response_code(opcode: u8, data: &[u8]) -> &[u8] {
    match data.split_first() {
        Some((&code, rest)) if code == opcode.wrapping_add(1) => rest,
        _ => data,
    }
}
