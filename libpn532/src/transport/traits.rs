// libpn532-rs/libpn532/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the byte stream away from frame and session
/// logic. One transport is owned by exactly one device at a time.
pub trait Transport: Send {
    /// Write raw bytes to the chip.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `n` bytes, waiting at most `timeout_ms`. Returns fewer
    /// than `n` bytes on timeout; never blocks past the deadline.
    fn read(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Discard anything already buffered on the input side.
    fn flush_input(&mut self) -> Result<()>;

    /// Release the underlying handle. Default implementation does nothing
    /// so in-memory transports need not care.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
