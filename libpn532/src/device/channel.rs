// libpn532-rs/libpn532/src/device/channel.rs

use log::{debug, log, warn};

use crate::constants::{ACK, TFI_ERROR, TFI_HOST_TO_CHIP};
use crate::device::config::WakeConfig;
use crate::protocol::{Frame, read_frame};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{ChannelError, ChipError, Error, Result};

/// Request/ACK/response handshake over a byte stream.
///
/// Strictly half-duplex: `send_command` takes `&mut self`, so a second
/// request cannot start before the previous one finished or failed.
/// Nothing here retries; callers decide whether to re-issue a command.
pub struct CommandChannel {
    transport: Box<dyn Transport>,
    read_timeout_ms: u64,
    frame_level: log::Level,
}

impl CommandChannel {
    pub fn new(transport: Box<dyn Transport>, read_timeout_ms: u64, frame_level: log::Level) -> Self {
        Self {
            transport,
            read_timeout_ms,
            frame_level,
        }
    }

    pub fn read_timeout_ms(&self) -> u64 {
        self.read_timeout_ms
    }

    /// Rouse the chip from low-power mode and drop whatever it echoed.
    pub fn wake(&mut self, wake: &WakeConfig) -> Result<()> {
        let burst = vec![wake.byte; wake.count];
        log!(self.frame_level, "TX wake: {}", bytes_to_hex_spaced(&burst));
        self.transport.write(&burst)?;
        std::thread::sleep(wake.pause);
        self.transport.flush_input()?;
        debug!("wake sequence sent ({} x {:#04x})", wake.count, wake.byte);
        Ok(())
    }

    /// Send one command and return its response frame.
    ///
    /// After a missing ACK or a malformed response the input buffer is
    /// flushed, so whatever the chip still had in flight cannot be read as
    /// the ACK of the next command.
    pub fn send_command(&mut self, opcode: u8, params: &[u8]) -> Result<Frame> {
        let frame = Frame::encode(TFI_HOST_TO_CHIP, opcode, params)?;
        log!(self.frame_level, "TX: {}", bytes_to_hex_spaced(&frame));
        self.transport.write(&frame)?;

        let ack = self.transport.read(ACK.len(), self.read_timeout_ms)?;
        if ack.as_slice() != ACK {
            let err = ChannelError::NoAck { received: ack };
            if err.is_nack() {
                warn!("chip sent NACK for command {:#04x}", opcode);
            } else {
                warn!("no ACK for command {:#04x}: {}", opcode, err);
            }
            return Err(self.resync(err.into()));
        }
        debug!("ACK for command {:#04x}", opcode);

        let response = match read_frame(&mut *self.transport, self.read_timeout_ms) {
            Ok(response) => response,
            Err(Error::Frame(fe)) => {
                return Err(self.resync(ChannelError::InvalidResponse(fe).into()));
            }
            Err(other) => return Err(other),
        };
        log!(
            self.frame_level,
            "RX: [{:02X}] {}",
            response.tag,
            bytes_to_hex_spaced(&response.data)
        );

        if response.tag == TFI_ERROR {
            warn!("chip answered command {:#04x} with an application error", opcode);
            return Err(ChipError::ApplicationError.into());
        }
        Ok(response)
    }

    /// Drop unread input after a protocol failure. A failing flush is a
    /// transport error and replaces `err`.
    fn resync(&mut self, err: Error) -> Error {
        match self.transport.flush_input() {
            Ok(()) => {
                debug!("input flushed after: {}", err);
                err
            }
            Err(flush_err) => flush_err,
        }
    }

    pub fn close(&mut self) -> Result<()> {
        self.transport.close()
    }
}
