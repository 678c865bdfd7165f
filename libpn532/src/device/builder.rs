// libpn532-rs/libpn532/src/device/builder.rs

use crate::device::config::{DeviceConfig, WakeConfig};
use crate::device::handle::{Device, Disconnected, Ready};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: DeviceConfig,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open a serial port with the current read timeout.
    #[cfg(feature = "serial")]
    pub fn open_serial(self, path: &str, baud: u32) -> Result<Self> {
        // Short per-syscall slices; the transport enforces the full deadline.
        let slice = crate::utils::ms(self.config.read_timeout_ms.min(100));
        let port = crate::transport::SerialTransport::open(path, baud, slice)?;
        Ok(self.with_transport(Box::new(port)))
    }

    pub fn config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn read_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.read_timeout_ms = timeout_ms;
        self
    }

    pub fn wake(mut self, wake: WakeConfig) -> Self {
        self.config.wake = wake;
        self
    }

    /// Log raw TX/RX frames at `level`.
    pub fn log_frames(mut self, level: log::Level) -> Self {
        self.config.logging.frame_level = level;
        self
    }

    /// Consume the builder and return a disconnected Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<Device<Disconnected>> {
        match self.transport {
            Some(t) => Ok(Device::new(t, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }

    /// Build and connect in one step.
    pub fn connect(self) -> Result<Device<Ready>> {
        self.build()?.connect()
    }
}
