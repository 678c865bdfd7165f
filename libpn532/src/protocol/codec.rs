// libpn532-rs/libpn532/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full wire frame (with header/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    cmd.encode()
}

/// Decode a complete captured response frame and parse the contained
/// response for the command that was sent.
pub fn decode_response_frame(opcode: u8, frame: &[u8]) -> Result<Response> {
    let decoded = Frame::decode(frame)?;
    Response::from_frame(opcode, &decoded)
}
