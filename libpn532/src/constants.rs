// libpn532-rs/libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Frame header: preamble 0x00 followed by start code 0x00 0xFF
pub const FRAME_HEADER: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Bytes a frame adds around TFI+data: header(3) + LEN + LCS + DCS + postamble
pub const FRAME_OVERHEAD: usize = 7;

/// Largest value the single-byte LEN field can carry
pub const MAX_FRAME_LEN: usize = 255;

/// Largest parameter block a command may carry (LEN minus TFI and opcode)
pub const MAX_PARAMS_LEN: usize = MAX_FRAME_LEN - 2;

/// Positive acknowledgment token
pub const ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Negative acknowledgment token
pub const NACK: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// Host->chip frame identifier (TFI)
pub const TFI_HOST_TO_CHIP: u8 = 0xD4;

/// Chip->host frame identifier as sent by PN532 silicon. Frames with this
/// tag carry the response code (`opcode + 1`) ahead of the fields.
pub const TFI_CHIP_TO_HOST: u8 = 0xD5;

/// Alternate chip->host identifier. Frames with this tag carry the fields
/// alone, status byte first.
pub const TFI_CHIP_TO_HOST_BARE: u8 = 0xD7;

/// TFI of the application-level error frame `00 00 FF 01 FF 7F 81 00`
pub const TFI_ERROR: u8 = 0x7F;

/// Byte repeated on the line to wake the chip from low-power mode
pub const WAKE_BYTE: u8 = 0x55;

/// Number of wake bytes sent before the first command
pub const WAKE_BURST_LEN: usize = 10;

/// PN532 command codes
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const CMD_IN_RELEASE: u8 = 0x52;
pub const CMD_TG_INIT_AS_TARGET: u8 = 0x8C;
pub const CMD_TG_GET_DATA: u8 = 0x86;
pub const CMD_TG_SET_DATA: u8 = 0x8E;

/// Largest UID an ISO14443A target can report (triple-size UID)
pub const MAX_UID_LEN: usize = 10;
