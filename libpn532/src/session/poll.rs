// libpn532-rs/libpn532/src/session/poll.rs

use log::{debug, info, warn};

use super::{CancellationToken, PollOptions, sleep_unless_cancelled};
use crate::card::Target;
use crate::device::{Device, Phase, Ready};
use crate::protocol::{Detection, SamConfig};
use crate::Result;

impl Device<Ready> {
    /// Configure the SAM with defaults unless that already happened.
    pub fn ensure_sam_configured(&mut self) -> Result<()> {
        if self.state().sam_configured {
            return Ok(());
        }
        self.sam_configuration(&SamConfig::default())
    }

    /// Repeat passive detection until a target shows up (`Some`) or
    /// `cancel` fires (`None`).
    pub fn poll_for_target(
        &mut self,
        cancel: &CancellationToken,
        opts: &PollOptions,
    ) -> Result<Option<Target>> {
        self.ensure_sam_configured()?;
        self.set_phase(Phase::Polling);
        info!("waiting for a {:?} target", opts.card_type);

        let outcome = loop {
            if cancel.is_cancelled() {
                break Ok(None);
            }
            match self.in_list_passive_target(opts.max_targets, opts.card_type) {
                Ok(Detection::Found(target)) => break Ok(Some(target)),
                Ok(Detection::NoTarget) => debug!("no target in field"),
                Err(e) if e.is_fatal() => break Err(e),
                Err(e) => warn!("detection failed: {}", e),
            }
            if sleep_unless_cancelled(cancel, opts.poll_interval) {
                break Ok(None);
            }
        };

        self.set_phase(Phase::Ready);
        outcome
    }

    /// One APDU exchange with `target`, bracketed by the Exchanging phase.
    pub fn exchange(&mut self, target: &Target, apdu: &[u8]) -> Result<Vec<u8>> {
        self.set_phase(Phase::Exchanging);
        let result = self.in_data_exchange(target.number(), apdu);
        self.set_phase(Phase::Ready);
        result
    }
}
