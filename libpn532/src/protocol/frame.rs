// libpn532-rs/libpn532/src/protocol/frame.rs

use crate::constants::{FRAME_HEADER, FRAME_OVERHEAD, FRAME_POSTAMBLE, MAX_FRAME_LEN};
use crate::protocol::checksum::{dcs, lcs, sum};
use crate::transport::Transport;
use crate::{FrameError, Result};

/// Anything the frame decoder can pull bytes from. `read_bytes` returns
/// fewer than `n` bytes when the source runs dry before the timeout.
pub trait ByteSource {
    fn read_bytes(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> ByteSource for T {
    fn read_bytes(&mut self, n: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        self.read(n, timeout_ms)
    }
}

/// In-memory byte source over a complete captured frame.
#[derive(Debug)]
pub struct SliceSource<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_bytes(&mut self, n: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        let end = (self.pos + n).min(self.buf.len());
        let out = self.buf[self.pos..end].to_vec();
        self.pos = end;
        Ok(out)
    }
}

/// PN532 normal information frame.
/// Format: [Preamble(1)] [Start(2)] [Len(1)] [LCS(1)] [TFI(1)] [Data(n)] [DCS(1)] [Postamble(1)]
/// Len counts TFI + Data; DCS covers TFI + Data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub tag: u8,
    pub data: Vec<u8>,
}

impl Frame {
    /// Encode a TFI, command code and parameters into a full wire frame.
    pub fn encode(tag: u8, opcode: u8, params: &[u8]) -> Result<Vec<u8>> {
        let length = 2 + params.len();
        if length > MAX_FRAME_LEN {
            return Err(FrameError::TooLong { length }.into());
        }

        let len = length as u8;
        let mut out = Vec::with_capacity(FRAME_OVERHEAD + length);
        out.extend_from_slice(&FRAME_HEADER);
        out.push(len);
        out.push(lcs(len));
        out.push(tag);
        out.push(opcode);
        out.extend_from_slice(params);
        out.push(dcs(&out[5..]));
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode a complete in-memory frame.
    pub fn decode(bytes: &[u8]) -> Result<Frame> {
        read_frame(&mut SliceSource::new(bytes), 0)
    }
}

fn read_exact<S: ByteSource + ?Sized>(src: &mut S, n: usize, timeout_ms: u64) -> Result<Vec<u8>> {
    let bytes = src.read_bytes(n, timeout_ms)?;
    if bytes.len() < n {
        return Err(FrameError::Truncated {
            expected: n,
            actual: bytes.len(),
        }
        .into());
    }
    Ok(bytes)
}

/// Read and validate one frame from `src`. Each read is bounded by
/// `timeout_ms`; a short read anywhere before the postamble is reported
/// as `FrameError::Truncated`.
pub fn read_frame<S: ByteSource + ?Sized>(src: &mut S, timeout_ms: u64) -> Result<Frame> {
    let header = read_exact(src, FRAME_HEADER.len(), timeout_ms)?;
    if header != FRAME_HEADER {
        return Err(FrameError::BadHeader { found: header }.into());
    }

    let len_lcs = read_exact(src, 2, timeout_ms)?;
    let (length, checksum) = (len_lcs[0], len_lcs[1]);
    if length.wrapping_add(checksum) != 0 {
        return Err(FrameError::BadLengthChecksum { length, checksum }.into());
    }

    let len = length as usize;
    let body = read_exact(src, len + 1, timeout_ms)?;
    let (payload, actual) = (&body[..len], body[len]);
    if sum(payload).wrapping_add(actual) != 0 {
        return Err(FrameError::BadDataChecksum {
            expected: dcs(payload),
            actual,
        }
        .into());
    }

    // Postamble only advances the stream; its value is not checked.
    let _ = src.read_bytes(1, timeout_ms)?;

    match payload.split_first() {
        Some((&tag, data)) => Ok(Frame {
            tag,
            data: data.to_vec(),
        }),
        None => Err(FrameError::Truncated {
            expected: 1,
            actual: 0,
        }
        .into()),
    }
}

/// Read one frame and return its data with the direction tag stripped.
pub fn decode_frame<S: ByteSource + ?Sized>(src: &mut S, timeout_ms: u64) -> Result<Vec<u8>> {
    read_frame(src, timeout_ms).map(|frame| frame.data)
}
