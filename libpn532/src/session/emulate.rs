// libpn532-rs/libpn532/src/session/emulate.rs

use log::{debug, info, warn};

use super::{CancellationToken, EmulationOptions, EmulationSummary, sleep_unless_cancelled};
use crate::device::{Device, Phase, Ready};
use crate::protocol::EmulationProfile;
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

impl Device<Ready> {
    /// Act as a card until `cancel` fires.
    ///
    /// Every command received from the external reader is handed to
    /// `responder`; a returned reply is sent back with TgSetData, `None`
    /// sends nothing. Send failures are counted and logged, not fatal.
    pub fn emulate<F>(
        &mut self,
        profile: &EmulationProfile,
        cancel: &CancellationToken,
        opts: &EmulationOptions,
        mut responder: F,
    ) -> Result<EmulationSummary>
    where
        F: FnMut(&[u8]) -> Option<Vec<u8>>,
    {
        self.ensure_sam_configured()?;
        let activation = self.tg_init_as_target(profile)?;
        self.set_phase(Phase::Emulating);

        let mut summary = EmulationSummary {
            activation,
            ..EmulationSummary::default()
        };

        let outcome = loop {
            if cancel.is_cancelled() {
                break Ok(());
            }
            match self.tg_get_data() {
                Ok(Some(command)) => {
                    summary.commands_received += 1;
                    debug!("reader sent: {}", bytes_to_hex_spaced(&command));
                    if let Some(reply) = responder(&command) {
                        match self.tg_set_data(&reply) {
                            Ok(()) => summary.replies_sent += 1,
                            Err(e) if e.is_fatal() => break Err(e),
                            Err(e) => {
                                summary.send_failures += 1;
                                warn!("reply not delivered: {}", e);
                            }
                        }
                    }
                }
                Ok(None) => {}
                Err(e) if e.is_fatal() => break Err(e),
                Err(e) => warn!("target data poll failed: {}", e),
            }
            if sleep_unless_cancelled(cancel, opts.poll_interval) {
                break Ok(());
            }
        };

        self.set_phase(Phase::Ready);
        info!(
            "emulation ended: {} commands, {} replies",
            summary.commands_received, summary.replies_sent
        );
        outcome.map(|_| summary)
    }
}
