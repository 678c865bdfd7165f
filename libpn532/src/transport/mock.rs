// libpn532-rs/libpn532/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    /// Replies waiting for a write; one is released per write.
    replies: VecDeque<Vec<u8>>,
    /// Bytes readable right now.
    rx: VecDeque<u8>,
    sent: Vec<Vec<u8>>,
    flushes: usize,
    closed: bool,
    fail_writes: bool,
    fail_close: bool,
}

/// Mock transport for unit tests. It records written payloads and
/// releases one scripted reply into the input buffer per write, so a
/// flush right after a write only discards that write's reply.
///
/// Clones share state: keep a clone to inspect traffic after handing the
/// transport to a device.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue bytes to be released by the next unanswered write.
    pub fn push_reply(&self, reply: Vec<u8>) {
        self.lock().replies.push_back(reply);
    }

    /// Make every subsequent write fail with a transport error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Make `close` fail with a transport error.
    pub fn set_fail_close(&self, fail: bool) {
        self.lock().fail_close = fail;
    }

    /// Every payload written so far, oldest first.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    pub fn last_sent(&self) -> Option<Vec<u8>> {
        self.lock().sent.last().cloned()
    }

    pub fn flush_count(&self) -> usize {
        self.lock().flushes
    }

    pub fn pending_replies(&self) -> usize {
        self.lock().replies.len()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut st = self.lock();
        if st.fail_writes {
            return Err(Error::Transport("mock write failure".into()));
        }
        st.sent.push(data.to_vec());
        if let Some(reply) = st.replies.pop_front() {
            st.rx.extend(reply);
        }
        Ok(())
    }

    fn read(&mut self, n: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        let mut st = self.lock();
        let take = n.min(st.rx.len());
        Ok(st.rx.drain(..take).collect())
    }

    fn flush_input(&mut self) -> Result<()> {
        let mut st = self.lock();
        st.rx.clear();
        st.flushes += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let mut st = self.lock();
        if st.fail_close {
            return Err(Error::Transport("mock close failure".into()));
        }
        st.closed = true;
        Ok(())
    }
}
