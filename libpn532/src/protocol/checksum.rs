// libpn532-rs/libpn532/src/protocol/checksum.rs

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - length (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over TFI + data
/// DCS = 0x100 - (sum(bytes) & 0xff)
pub fn dcs(bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(bytes))
}

/// Wrapping byte sum used by both checksums.
pub fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
