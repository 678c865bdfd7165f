// libpn532-rs/pn532-cli/src/scenarios.rs

use libpn532::Result;
use libpn532::device::{Device, Ready};
use libpn532::protocol::EmulationProfile;
use libpn532::session::{CancellationToken, EmulationOptions, PollOptions};

use crate::report;

/// SELECT PPSE (2PAY.SYS.DDF01), the first command of an EMV contactless read.
pub const SELECT_PPSE: [u8; 20] = [
    0x00, 0xA4, 0x04, 0x00, 0x0E, 0x32, 0x50, 0x41, 0x59, 0x2E, 0x53, 0x59, 0x53, 0x2E, 0x44,
    0x44, 0x46, 0x30, 0x31, 0x00,
];

/// Status word answered to every APDU while emulating.
pub const SW_OK: [u8; 2] = [0x90, 0x00];

/// The phone reads a card on its own; only instructions are printed.
pub fn phone_reads_card() {
    report::phone_reads_card_setup();
}

/// Poll until a card shows up, send SELECT PPSE, then release it.
pub fn pn532_reads_card(dev: &mut Device<Ready>, cancel: &CancellationToken) -> Result<()> {
    report::pn532_reads_card_setup();

    let Some(target) = dev.poll_for_target(cancel, &PollOptions::default())? else {
        return Ok(());
    };
    report::card_details(&target);

    report::apdu_command(&SELECT_PPSE);
    match target.exchange(dev, &SELECT_PPSE) {
        Ok(answer) => report::apdu_answer(&answer),
        Err(e) => report::apdu_failed(&e),
    }

    target.release(dev);
    report::reading_complete();
    Ok(())
}

/// Reply to an APDU from the phone. Anything shorter than a command
/// header is left unanswered.
pub fn answer_apdu(command: &[u8]) -> Option<Vec<u8>> {
    (command.len() >= 4).then(|| SW_OK.to_vec())
}

/// Act as a card and answer every APDU with 90 00 until cancelled.
pub fn pn532_emulates(dev: &mut Device<Ready>, cancel: &CancellationToken) -> Result<()> {
    report::pn532_emulates_setup();

    let summary = dev.emulate(
        &EmulationProfile::default(),
        cancel,
        &EmulationOptions::default(),
        |command| {
            report::phone_command(command);
            let reply = answer_apdu(command);
            if let Some(reply) = &reply {
                report::responding(reply);
            }
            reply
        },
    )?;

    report::emulation_summary(&summary);
    Ok(())
}
