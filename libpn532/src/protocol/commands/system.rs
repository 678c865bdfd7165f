// libpn532-rs/libpn532/src/protocol/commands/system.rs

/// SAM operating mode (first SAMConfiguration parameter)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamMode {
    Normal = 0x01,
    VirtualCard = 0x02,
    WiredCard = 0x03,
    DualCard = 0x04,
}

/// SAMConfiguration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamConfig {
    pub mode: SamMode,
    /// Virtual-card timeout in units of 50 ms
    pub timeout: u8,
    pub use_irq: bool,
}

impl Default for SamConfig {
    fn default() -> Self {
        Self {
            mode: SamMode::Normal,
            timeout: 0x14,
            use_irq: true,
        }
    }
}

/// Encode GetFirmwareVersion parameters (none).
pub fn encode_get_firmware_version() -> Vec<u8> {
    Vec::new()
}

/// Encode SAMConfiguration parameters: mode, timeout, IRQ.
pub fn encode_sam_configuration(config: &SamConfig) -> Vec<u8> {
    vec![config.mode as u8, config.timeout, config.use_irq as u8]
}
