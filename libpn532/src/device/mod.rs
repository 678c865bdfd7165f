// libpn532-rs/libpn532/src/device/mod.rs

pub mod builder;
pub mod channel;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use channel::CommandChannel;
pub use config::{DeviceConfig, LogConfig, WakeConfig};
pub use handle::{Device, Disconnected, Phase, Ready, SessionState};
