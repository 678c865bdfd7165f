// libpn532-rs/libpn532/src/protocol/commands/target.rs

/// Card identity the chip presents while acting as a target.
///
/// The default mimics an ISO14443-4 smart card: DEP-only mode, ATQA
/// `00 04`, UID `08 12 34 56` and SAK `20`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulationProfile {
    pub mode: u8,
    pub atqa: [u8; 2],
    pub uid: [u8; 4],
    pub sak: u8,
    pub general_bytes: Vec<u8>,
    pub historical_bytes: Vec<u8>,
}

impl Default for EmulationProfile {
    fn default() -> Self {
        Self {
            mode: 0x04,
            atqa: [0x00, 0x04],
            uid: [0x08, 0x12, 0x34, 0x56],
            sak: 0x20,
            general_bytes: Vec::new(),
            historical_bytes: Vec::new(),
        }
    }
}

/// Encode TgInitAsTarget parameters.
/// Layout: mode(1) + ATQA(2) + UID(4) + SAK(1) + FeliCa params(3, zeroed)
/// + len(NFCID3)=0 + len(Gt) + Gt + len(Tk) + Tk
pub fn encode_tg_init_as_target(profile: &EmulationProfile) -> Vec<u8> {
    let mut buf = Vec::with_capacity(14 + profile.general_bytes.len() + profile.historical_bytes.len());
    buf.push(profile.mode);
    buf.extend_from_slice(&profile.atqa);
    buf.extend_from_slice(&profile.uid);
    buf.push(profile.sak);
    buf.extend_from_slice(&[0x00, 0x00, 0x00]);
    buf.push(0x00);
    buf.push(profile.general_bytes.len() as u8);
    buf.extend_from_slice(&profile.general_bytes);
    buf.push(profile.historical_bytes.len() as u8);
    buf.extend_from_slice(&profile.historical_bytes);
    buf
}

/// Encode TgGetData parameters (none).
pub fn encode_tg_get_data() -> Vec<u8> {
    Vec::new()
}

/// Encode TgSetData parameters: the raw bytes to transmit
pub fn encode_tg_set_data(data: &[u8]) -> Vec<u8> {
    data.to_vec()
}
