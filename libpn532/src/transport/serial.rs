// libpn532-rs/libpn532/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::{Duration, Instant};

use log::debug;
use serialport::{ClearBuffer, SerialPort};

use crate::transport::traits::Transport;
use crate::utils::ms;
use crate::Result;

/// Serial (UART / RFCOMM) transport backed by the `serialport` crate.
pub struct SerialTransport {
    port: Box<dyn SerialPort>,
    path: String,
}

impl SerialTransport {
    /// Open `path` at `baud`. `timeout` bounds each underlying read
    /// syscall; `Transport::read` enforces its own deadline on top.
    pub fn open(path: &str, baud: u32, timeout: Duration) -> Result<Self> {
        let port = serialport::new(path, baud).timeout(timeout).open()?;
        debug!("opened serial port {} at {} baud", path, baud);
        Ok(Self {
            port,
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }

    fn read(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        let deadline = Instant::now() + ms(timeout_ms);
        let mut out = Vec::with_capacity(n);
        let mut buf = [0u8; 64];

        while out.len() < n && Instant::now() < deadline {
            let want = (n - out.len()).min(buf.len());
            match self.port.read(&mut buf[..want]) {
                Ok(0) => {}
                Ok(got) => out.extend_from_slice(&buf[..got]),
                // A per-syscall timeout just means nothing arrived yet.
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {}
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(out)
    }

    fn flush_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // The handle is released on drop; make sure pending output is out.
        self.port.flush()?;
        debug!("closing serial port {}", self.path);
        Ok(())
    }
}
