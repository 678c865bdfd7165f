#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libpn532::protocol::EmulationProfile;
use libpn532::session::{CancellationToken, EmulationOptions};
use libpn532::transport::MockTransport;

#[test]
fn emulation_answers_apdus_with_9000() {
    let mock = MockTransport::new();
    common::seed_connect(&mock);
    mock.push_reply(common::reply(0x14, &[]));
    mock.push_reply(common::reply(0x8C, &[0x08]));
    let mut get = vec![0x00];
    get.extend(common::fixtures::select_ppse());
    mock.push_reply(common::reply(0x86, &get));
    mock.push_reply(common::reply(0x8E, &[0x00]));

    let mut dev = common::ready_device(mock.clone()).unwrap();
    let cancel = CancellationToken::new();
    let stop = cancel.clone();
    let opts = EmulationOptions {
        poll_interval: Duration::ZERO,
    };

    let summary = dev
        .emulate(&EmulationProfile::default(), &cancel, &opts, |apdu| {
            stop.cancel();
            (apdu.len() >= 4).then(|| vec![0x90, 0x00])
        })
        .unwrap();

    assert_eq!(summary.commands_received, 1);
    assert_eq!(summary.replies_sent, 1);
    // TgSetData frame carries 90 00
    let last = mock.last_sent().unwrap();
    assert_eq!(&last[5..9], &[0xD4, 0x8E, 0x90, 0x00]);
}
